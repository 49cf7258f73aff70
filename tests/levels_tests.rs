//! Catalog validation: every shipped level must be well-formed and clearable.

use std::collections::HashSet;

use tui_frogpond::core::{levels, load_level, Game};
use tui_frogpond::types::{Command, Position};

#[test]
fn test_catalog_has_levels() {
    assert!(levels::count() >= 1);
}

#[test]
fn test_leaf_positions_are_unique_per_level() {
    for index in 0..levels::count() {
        let game = load_level(index as i32);

        let mut seen: HashSet<Position> = HashSet::new();
        seen.insert(game.frog.position());
        for leaf in &game.leaves {
            assert!(
                seen.insert(leaf.position),
                "level {index} duplicates a leaf at {:?}",
                leaf.position
            );
        }
    }
}

#[test]
fn test_leaves_lie_inside_the_board() {
    use tui_frogpond::types::{BOARD_HEIGHT, BOARD_WIDTH};

    for index in 0..levels::count() {
        let game = load_level(index as i32);
        for leaf in game.leaves.iter().chain(std::iter::once(&game.frog.leaf)) {
            let Position { x, y } = leaf.position;
            assert!(x >= 0 && x < BOARD_WIDTH && y >= 0 && y < BOARD_HEIGHT);
        }
    }
}

#[test]
fn test_every_level_starts_playable() {
    for index in 0..levels::count() {
        let game = load_level(index as i32);
        assert!(!game.completed(), "level {index} starts finished");
        assert!(!game.stuck(), "level {index} starts stuck");
    }
}

#[test]
fn test_every_level_is_clearable() {
    for index in 0..levels::count() {
        let game = load_level(index as i32);
        let mut visited = HashSet::new();
        assert!(
            clearable(&game, &mut visited),
            "level {index} ('{}') has no winning jump order",
            game.level.name
        );
    }
}

/// Depth-first search over jump orders, memoized on (frog, leaves).
fn clearable(game: &Game, visited: &mut HashSet<(Position, Vec<Position>)>) -> bool {
    if game.completed() {
        return true;
    }

    let mut key: Vec<Position> = game.leaves.iter().map(|l| l.position).collect();
    key.sort_by_key(|p| (p.y, p.x));
    if !visited.insert((game.frog.position(), key)) {
        return false;
    }

    game.reachable_leaves()
        .collect::<Vec<_>>()
        .into_iter()
        .any(|leaf| clearable(&game.apply(Command::MoveTo(leaf)), visited))
}
