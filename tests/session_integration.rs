// Session integration tests
//
// Drive a whole session through the public API the way a host runtime
// would: bootstrap, input events, per-frame updates.

use tilecraft::{
    BlockId, ButtonRect, Game, GameConfig, GameMode, InputEvent, KeyCode, MouseButton,
    RecipeButtonLayout, ResourceKind,
};

fn seeded_game(seed: u64) -> Game {
    let config = GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    };
    Game::new(&config).expect("default config is valid")
}

#[test]
fn test_fresh_session_spawns_at_center() {
    let game = seeded_game(1);
    let world = game.world();
    assert_eq!(
        game.player().position(),
        ((world.width() / 2) as i32, (world.height() / 2) as i32)
    );
    assert_eq!(game.player().health(), 100);
    assert_eq!(game.player().hunger(), 100);
    assert!(!game.player().can_mine_ore());
}

#[test]
fn test_bottom_row_always_water() {
    for seed in 0..10 {
        let game = seeded_game(seed);
        let world = game.world();
        let bottom = world.height() as i32 - 1;
        for x in 0..world.width() as i32 {
            assert_eq!(world.get(x, bottom), BlockId::WATER);
        }
    }
}

#[test]
fn test_same_seed_same_world() {
    let a = seeded_game(42);
    let b = seeded_game(42);
    assert_eq!(a.world().tiles(), b.world().tiles());
}

#[test]
fn test_collision_end_to_end() {
    let mut game = seeded_game(2);
    let (px, py) = game.player().position();

    game.world_mut().set(px + 1, py, BlockId::STONE);
    assert!(!game.handle_movement(KeyCode::KeyD));
    assert_eq!(game.player().position(), (px, py));

    game.world_mut().set(px - 1, py, BlockId::GRASS);
    assert!(game.handle_movement(KeyCode::KeyA));
    assert_eq!(game.player().position(), (px - 1, py));
}

#[test]
fn test_mine_tree_then_place_dirt() {
    let mut game = seeded_game(3);
    let layout = RecipeButtonLayout::new();
    let tile = game.tile_size() as f32;
    let click = |x: i32, y: i32, button| InputEvent::MouseClick {
        x: x as f32 * tile + 1.0,
        y: y as f32 * tile + 1.0,
        button,
    };

    game.world_mut().set(2, 2, BlockId::TREE);
    let food_before = game.player().inventory().resource(ResourceKind::Food);
    assert!(game.handle_input(click(2, 2, MouseButton::Left), &layout));
    assert_eq!(game.world().get(2, 2), BlockId::AIR);
    assert_eq!(game.player().inventory().resource(ResourceKind::Wood), 1);
    assert!(game.player().inventory().resource(ResourceKind::Food) >= food_before);

    game.world_mut().set(3, 2, BlockId::GRASS);
    assert!(game.handle_input(click(3, 2, MouseButton::Left), &layout));
    assert_eq!(game.player().inventory().selected_block(), Some(BlockId::DIRT));

    assert!(game.handle_input(click(2, 2, MouseButton::Right), &layout));
    assert_eq!(game.world().get(2, 2), BlockId::DIRT);
    assert!(game.handle_input(click(3, 2, MouseButton::Right), &layout));
    assert_eq!(game.world().get(3, 2), BlockId::DIRT);
}

#[test]
fn test_pickaxe_unlocks_ore() {
    let mut game = seeded_game(4);
    let layout = RecipeButtonLayout::stacked(
        tilecraft::RECIPE_REGISTRY.iter(),
        glam::Vec2::new(100.0, 100.0),
        glam::Vec2::new(200.0, 40.0),
        10.0,
    );
    let pickaxe = layout.bounds("Stone Pickaxe").expect("pickaxe button laid out");

    game.world_mut().set(1, 1, BlockId::ORE);
    let ore_click = InputEvent::MouseClick {
        x: game.tile_size() as f32 * 1.5,
        y: game.tile_size() as f32 * 1.5,
        button: MouseButton::Left,
    };
    assert!(!game.handle_input(ore_click, &layout));
    assert_eq!(game.world().get(1, 1), BlockId::ORE);
    assert_eq!(game.player().inventory().resource(ResourceKind::Ore), 0);

    let inventory = game.player_mut().inventory_mut();
    inventory.add_resource(ResourceKind::Wood, 1);
    inventory.add_resource(ResourceKind::Stone, 2);

    assert!(game.handle_input(InputEvent::KeyDown(KeyCode::KeyC), &layout));
    assert_eq!(game.mode(), GameMode::CraftingMenuOpen);

    let center = (pickaxe.min + pickaxe.max) / 2.0;
    let craft_click = InputEvent::MouseClick {
        x: center.x,
        y: center.y,
        button: MouseButton::Left,
    };
    assert!(game.handle_input(craft_click, &layout));
    assert!(game.player().can_mine_ore());
    assert_eq!(game.player().inventory().resource(ResourceKind::Ore), 1);
    assert_eq!(game.player().inventory().resource(ResourceKind::Wood), 0);
    assert_eq!(game.player().inventory().resource(ResourceKind::Stone), 0);

    assert!(game.handle_input(InputEvent::KeyDown(KeyCode::KeyC), &layout));
    assert_eq!(game.mode(), GameMode::Exploring);
    assert!(game.handle_input(ore_click, &layout));
    assert_eq!(game.world().get(1, 1), BlockId::AIR);
    assert_eq!(game.player().inventory().resource(ResourceKind::Ore), 2);
}

#[test]
fn test_crafting_click_outside_buttons_is_noop() {
    let mut game = seeded_game(5);
    let mut layout = RecipeButtonLayout::new();
    layout.record("Stone Pickaxe", ButtonRect::new(0.0, 0.0, 50.0, 20.0));
    game.toggle_crafting();

    let tiles_before = game.world().tiles().to_vec();
    assert!(!game.handle_mouse(300.0, 300.0, MouseButton::Left, &layout));
    assert!(!game.handle_mouse(300.0, 300.0, MouseButton::Right, &layout));
    assert_eq!(game.world().tiles(), tiles_before.as_slice());
}

#[test]
fn test_starvation_over_time() {
    let config = GameConfig {
        seed: Some(6),
        hunger_interval: 2,
        ..GameConfig::default()
    };
    let mut game = Game::new(&config).expect("config is valid");

    // 20 ticks empty hunger; each further tick costs 10 health
    for _ in 0..(2 * 20) {
        game.update();
    }
    assert_eq!(game.player().hunger(), 0);
    assert_eq!(game.player().health(), 90);

    for _ in 0..(2 * 20) {
        game.update();
    }
    assert_eq!(game.player().health(), 0);

    game.player_mut().inventory_mut().add_resource(ResourceKind::Food, 1);
    assert!(game.handle_input(InputEvent::KeyDown(KeyCode::KeyE), &RecipeButtonLayout::new()));
    assert_eq!(game.player().hunger(), 20);
    assert_eq!(game.player().health(), 10);
}
