//! Pathfinding showcase: builds a map, runs a query, renders the route,
//! then replays the same query step by step and finishes with a few
//! randomly generated maps.

use std::error::Error;

use jumpgrid_core::Point;
use jumpgrid_paths::{JumpGrid, PathBuffer, SearchState, expand_path, path_cost};
use rand::{RngExt, SeedableRng, rngs::StdRng};

const MAP: &str = "\
    ....................
    ....########........
    ....#......#........
    ....#......#...###..
    ....#......#.....#..
    ....####.###.....#..
    .........#.......#..
    ....#....#..####.#..
    ....#....#..#..#.#..
    ....#.......#..#....
    ....#########..#....
    ...............#....";

fn main() -> Result<(), Box<dyn Error>> {
    let grid = JumpGrid::from_ascii(MAP)?;
    let start = Point::new(0, 11);
    let goal = Point::new(19, 11);
    let mut buf = PathBuffer::new(&grid);

    println!(
        "map {}x{}: {} obstacles, {} jump points",
        grid.width(),
        grid.height(),
        count_cells(&grid, |p| grid.is_blocked(p)),
        count_cells(&grid, |p| grid.is_jump_point(p)),
    );

    let waypoints = buf
        .find_path(&grid, start, goal)
        .ok_or("no route on the showcase map")?;
    let route = expand_path(&waypoints);
    println!(
        "route {start} -> {goal}: cost {}, {} waypoints, {} cells",
        path_cost(&waypoints),
        waypoints.len(),
        route.len(),
    );
    println!("{}", render(&grid, &route));

    replay_stepwise(&grid, &mut buf, start, goal);
    random_maps(&mut buf);
    Ok(())
}

fn count_cells(grid: &JumpGrid, pred: impl Fn(Point) -> bool) -> usize {
    let mut n = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if pred(Point::new(x, y)) {
                n += 1;
            }
        }
    }
    n
}

/// Draw the map with the route overlaid: `S` start, `G` goal, `*` route,
/// `+` jump point.
fn render(grid: &JumpGrid, route: &[Point]) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let glyph = if route.first() == Some(&p) {
                'S'
            } else if route.last() == Some(&p) {
                'G'
            } else if route.contains(&p) {
                '*'
            } else if grid.is_blocked(p) {
                '#'
            } else if grid.is_jump_point(p) {
                '+'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// The same query, one expansion per step, as a frame-budgeted caller
/// would run it.
fn replay_stepwise(grid: &JumpGrid, buf: &mut PathBuffer, start: Point, goal: Point) {
    const SHOWN: usize = 8;
    let mut steps = 0;
    let mut search = buf.search(grid, start, goal);
    loop {
        match search.step() {
            Some(SearchState::Searching(node)) => {
                steps += 1;
                if steps <= SHOWN {
                    println!("step {steps}: expanding {} at cost {}", node.pos, node.cost);
                } else if steps == SHOWN + 1 {
                    println!("step {steps}: ...");
                }
            }
            Some(SearchState::Found(path)) => {
                println!("found after {steps} expansions: {} waypoints", path.len());
                break;
            }
            Some(SearchState::NotFound) | None => {
                println!("no route after {steps} expansions");
                break;
            }
        }
    }
}

/// A handful of seeded scatter maps, to show build and query cost scaling.
fn random_maps(buf: &mut PathBuffer) {
    const WIDTH: i32 = 24;
    const HEIGHT: i32 = 16;
    const DENSITY: i32 = 25;
    for seed in [1, 7, 42] {
        let grid = scatter_map(seed, WIDTH, HEIGHT, DENSITY);
        let from = Point::new(0, 0);
        let to = Point::new(WIDTH - 1, HEIGHT - 1);
        let jump_points = count_cells(&grid, |p| grid.is_jump_point(p));
        match buf.find_path(&grid, from, to) {
            Some(path) => println!(
                "seed {seed}: {jump_points} jump points, route cost {} with {} waypoints",
                path_cost(&path),
                path.len(),
            ),
            None => println!("seed {seed}: {jump_points} jump points, {from} -> {to} unreachable"),
        }
    }
}

/// Seeded obstacle scatter over the interior. The border stays clear, so
/// corner-to-corner queries always have a route.
fn scatter_map(seed: u64, width: i32, height: i32, density: i32) -> JumpGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let cells: Vec<bool> = (0..width * height)
        .map(|_| rng.random_range(0..100) < density)
        .collect();
    JumpGrid::from_fn(width, height, |p| {
        let interior = p.x > 0 && p.x < width - 1 && p.y > 0 && p.y < height - 1;
        interior && cells[(p.y * width + p.x) as usize]
    })
}
