//! Scatter random obstacles over a grid, solve a path across it, and print
//! the result as ASCII.
//!
//! Run: cargo run --bin maze

use rand::{Rng, RngExt, SeedableRng};
use tilenav_grid::{CellGrid, OBSTACLE, Point};
use tilenav_paths::PathfinderRegistry;

const WIDTH: i32 = 24;
const HEIGHT: i32 = 12;

fn main() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let mut data = scatter(&mut rng, WIDTH, HEIGHT, WIDTH * HEIGHT / 5);
    let start = Point::new(0, 0);
    let goal = Point::new(WIDTH - 1, HEIGHT - 1);
    data[start.x as usize][start.y as usize] = 0;
    data[goal.x as usize][goal.y as usize] = 0;

    let mut registry = PathfinderRegistry::new();
    let pathfinder = registry.get_or_create("maze");
    if let Err(err) = pathfinder.init(WIDTH, HEIGHT, data, false) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let found = pathfinder.find_path(
        f64::from(start.x),
        f64::from(start.y),
        f64::from(goal.x),
        f64::from(goal.y),
    );
    match found {
        Some(waypoints) => {
            let list = waypoints
                .iter()
                .map(|wp| wp.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{} waypoints: {list}", waypoints.len());
            render(pathfinder.grid(), start, &waypoints);
        }
        None => println!("no path from {start} to {goal}"),
    }
}

/// Fresh `width` x `height` zero-cost grid with up to `count` cells turned
/// into obstacles (duplicate draws hit the same cell).
fn scatter(rng: &mut impl Rng, width: i32, height: i32, count: i32) -> Vec<Vec<i32>> {
    let mut data = vec![vec![0i32; height as usize]; width as usize];
    for _ in 0..count {
        let x = rng.random_range(0..width) as usize;
        let y = rng.random_range(0..height) as usize;
        data[x][y] = OBSTACLE;
    }
    data
}

/// Print the grid with the walked path marked in.
fn render(grid: &CellGrid, start: Point, waypoints: &[Point]) {
    let mut on_path = vec![vec![false; grid.vcells() as usize]; grid.hcells() as usize];
    let mut at = start;
    for &wp in waypoints {
        while at != wp {
            let (dx, dy) = ((wp.x - at.x).signum(), (wp.y - at.y).signum());
            at = at.shift(dx, dy);
            on_path[at.x as usize][at.y as usize] = true;
        }
    }
    for y in 0..grid.vcells() {
        let mut row = String::with_capacity(grid.hcells() as usize);
        for x in 0..grid.hcells() {
            let p = Point::new(x, y);
            row.push(if p == start {
                'S'
            } else if Some(&p) == waypoints.last() {
                'G'
            } else if on_path[x as usize][y as usize] {
                '*'
            } else if grid.at(x, y) == OBSTACLE {
                '#'
            } else {
                '.'
            });
        }
        println!("{row}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_builds_a_well_formed_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = scatter(&mut rng, 9, 5, 11);
        assert_eq!(data.len(), 9);
        assert!(data.iter().all(|column| column.len() == 5));
        let obstacles = data
            .iter()
            .flatten()
            .filter(|&&cost| cost == OBSTACLE)
            .count();
        assert!(obstacles >= 1 && obstacles <= 11);
        assert!(
            data.iter()
                .flatten()
                .all(|&cost| cost == 0 || cost == OBSTACLE)
        );
    }
}
