use super::{Game, GameMode};
use crate::item::ResourceKind;
use crate::world::BlockId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Read-only view of the session state the renderer draws from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub frame: u64,
    pub mode: GameMode,
    pub player_position: (i32, i32),
    pub health: i32,
    pub hunger: i32,
    pub can_mine_ore: bool,
    pub resources: BTreeMap<ResourceKind, u32>,
    pub slots: Vec<Option<BlockId>>,
    pub selected_slot: usize,
    pub ambient_tint: [u8; 4],
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let player = game.player();
        let inventory = player.inventory();

        Self {
            frame: game.frame(),
            mode: game.mode(),
            player_position: player.position(),
            health: player.health(),
            hunger: player.hunger(),
            can_mine_ore: player.can_mine_ore(),
            resources: ResourceKind::ALL
                .iter()
                .map(|&kind| (kind, inventory.resource(kind)))
                .collect(),
            slots: inventory.slots().iter().map(|slot| slot.block()).collect(),
            selected_slot: inventory.selected_index(),
            ambient_tint: game.ambient_tint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::{Game, GameMode};
    use crate::inventory::INVENTORY_SLOTS;

    #[test]
    fn test_snapshot_fresh_session() {
        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        };
        let game = Game::new(&config).expect("default config is valid");
        let snapshot = game.snapshot();

        assert_eq!(snapshot.frame, 0);
        assert_eq!(snapshot.mode, GameMode::Exploring);
        assert_eq!(snapshot.health, 100);
        assert_eq!(snapshot.hunger, 100);
        assert_eq!(snapshot.slots.len(), INVENTORY_SLOTS);
        assert!(snapshot.resources.values().all(|&n| n == 0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::default()
        };
        let game = Game::new(&config).expect("default config is valid");
        let json = serde_json::to_value(game.snapshot()).expect("snapshot serializes");
        assert_eq!(json["resources"]["wood"], 0);
        assert_eq!(json["mode"], "Exploring");
    }
}
