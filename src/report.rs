use prettytable::{cell, row, Table};

use crate::cube::{ColorState, Cube};

fn state_name(cube: &Cube) -> &'static str {
    match cube.color_state() {
        ColorState::Neutral => "resting",
        ColorState::Targeted => "targeted",
        ColorState::Falling => "falling",
    }
}

/// Table of the current cube states for debugging
pub fn cube_table(cubes: &[Cube]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["name", "position", "velocity", "state"]);
    for cube in cubes {
        let p = cube.position;
        let v = cube.velocity;
        table.add_row(row![
            cube.name,
            format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
            format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z),
            state_name(cube)
        ]);
    }
    table
}

pub fn print_cubes(cubes: &[Cube]) {
    cube_table(cubes).printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;

    #[test]
    fn one_row_per_cube_plus_header() {
        let mut falling = Cube::new("cube1", Point3::new(1.5, 2.0, 0.0), true);
        falling.is_moving = true;
        let cubes = vec![Cube::new("cube0", Point3::new(0.0, 0.5, 0.0), true), falling];
        let table = cube_table(&cubes);
        assert_eq!(table.len(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("cube1"));
        assert!(rendered.contains("falling"));
        assert!(rendered.contains("(1.50, 2.00, 0.00)"));
    }
}
