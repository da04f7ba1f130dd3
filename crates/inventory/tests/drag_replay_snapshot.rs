use std::path::PathBuf;

use chestgrid_inventory::{
    Coordinate, DragStart, DropTarget, InventoryHistory, InventorySeed, InventoryState, ItemId,
    SectionName, DEFAULT_HISTORY_LIMIT,
};
use chestgrid_testkit::{run_replay, ReplayConfig};

enum Step {
    Drag(DragStart, Option<DropTarget>),
    Undo,
}

fn item(id: &str) -> ItemId {
    ItemId::parse(id).expect("valid item id")
}

fn drag(id: &str, section: SectionName, row: u8, column: u8) -> DragStart {
    DragStart {
        item: item(id),
        section,
        coordinate: Coordinate::new(row, column),
    }
}

fn drop_at(section: SectionName, row: u8, column: u8) -> Option<DropTarget> {
    Some(DropTarget {
        section,
        coordinate: Coordinate::new(row, column),
    })
}

#[test]
fn drag_sequence_matches_golden() {
    let seed = InventorySeed::default()
        .with(SectionName::Storage, 0, 0, item("diamond"))
        .with(SectionName::Inventory, 1, 2, item("apple"))
        .with(SectionName::Hotbar, 0, 0, item("sword"));
    let state = InventoryState::from_seed(&seed).expect("seed is valid");

    let steps = [
        Step::Drag(
            drag("diamond", SectionName::Storage, 0, 0),
            drop_at(SectionName::Hotbar, 0, 3),
        ),
        Step::Drag(
            drag("sword", SectionName::Hotbar, 0, 0),
            drop_at(SectionName::Inventory, 1, 2),
        ),
        Step::Drag(drag("diamond", SectionName::Hotbar, 0, 3), None),
        Step::Undo,
    ];

    let config = ReplayConfig {
        name: "drag_sequence".to_string(),
        snapshot_path: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/snapshots/drag_sequence.json"),
    };

    run_replay(
        config,
        InventoryHistory::new(state, DEFAULT_HISTORY_LIMIT),
        &steps,
        |history, step| {
            match step {
                Step::Drag(start, target) => {
                    history.apply_drag(start, target.as_ref())?;
                }
                Step::Undo => {
                    history.undo();
                }
            }
            Ok(())
        },
        |history| history.current().occupied(),
    )
    .expect("replay matches golden snapshot");
}
