// Trace fire spread through a tiny hand-built forest
use forest_fire_core::{Condition, ForestGrid, Position, Scheduler, TreeCell};

fn main() {
    // Two rows, five columns, with a gap at (0, 2)
    let mut grid = ForestGrid::new(2, 5);
    let mut scheduler = Scheduler::new();
    for pos in forest_fire_core::grid::sweep_order(2, 5) {
        if pos == Position::new(0, 2) {
            continue;
        }
        let tree = if pos.col == 0 {
            TreeCell::burning(pos)
        } else {
            TreeCell::new(pos)
        };
        grid.place(pos, tree).expect("fresh grid slot");
        scheduler.add(pos).expect("fresh scheduler");
    }

    println!("Tick | Row 0 | Row 1");
    println!("-----|-------|------");

    let mut tick = 0;
    loop {
        println!("{:4} | {} | {}", tick, row(&grid, 0), row(&grid, 1));
        if grid.count(Condition::OnFire) == 0 {
            break;
        }
        scheduler.step(&mut grid);
        tick += 1;
    }
}

fn row(grid: &ForestGrid, r: usize) -> String {
    (0..grid.width())
        .map(|c| match grid.condition_at(Position::new(r, c)) {
            None => '.',
            Some(Condition::Fine) => 'T',
            Some(Condition::OnFire) => '*',
            Some(Condition::BurnedOut) => '#',
        })
        .collect()
}
