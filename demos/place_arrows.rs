use pictograph::{ArrowPositioner, JsonDirSource, parse_movement_rows};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let rows = parse_movement_rows(include_str!("../tests/data/movements.json"))?;
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/placements");
    let positioner = ArrowPositioner::with_source(JsonDirSource::new(root))?;

    for row in &rows {
        let pictograph = row.to_pictograph();
        for (color, arrow) in positioner.calculate_all_arrow_points(&pictograph)? {
            let (x, y, rot) = arrow.as_tuple();
            println!(
                "{} {color}: {} at ({x:.1}, {y:.1}) rot {rot} mirror {}",
                row.letter, arrow.location, arrow.mirror
            );
        }
    }

    Ok(())
}
