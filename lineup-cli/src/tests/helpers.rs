//! Test helpers for writing payload files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use lineup_core::Player;
use lineup_core::test_support::fifteen_player_pool;
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Payload records for `players`, in the wire format accepted by the CLI.
pub(super) fn player_records(players: &[Player]) -> Value {
    Value::Array(
        players
            .iter()
            .map(|player| {
                json!({
                    "id": player.id,
                    "price": player.price,
                    "score": player.score,
                    "position": player.position.as_str(),
                })
            })
            .collect(),
    )
}

/// The fifteen player pool as a bare array payload.
pub(super) fn fifteen_player_records() -> Value {
    player_records(&fifteen_player_pool())
}
