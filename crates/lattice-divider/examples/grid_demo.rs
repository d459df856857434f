//! Lattice Divider Grid Demo
//!
//! Lays out a 4-column grid of 13 items with 1px dividers and prints the
//! insets and paint operations the divider produces.
//!
//! Run with: cargo run -p lattice-divider --example grid_demo [defaults.toml]
//!
//! Set `RUST_LOG=lattice_divider=trace` to see the engine's logging.

use lattice_divider::config::load_defaults;
use lattice_divider::prelude::*;
use tracing_subscriber::EnvFilter;

const SPAN_COUNT: usize = 4;
const ITEM_COUNT: usize = 13;
const ITEM_HEIGHT: i32 = 48;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lattice_divider=debug")))
        .init();

    let defaults = match std::env::args().nth(1) {
        Some(path) => load_defaults(path)?,
        None => DividerDefaults::default(),
    };

    let mut list = RecyclerList::new(GridLayout::new(Orientation::Vertical, SPAN_COUNT)?)
        .with_item_count(ITEM_COUNT);

    let divider = DividerBuilder::with_defaults(defaults)
        .color(Color::from_rgb8(0xCF, 0xCF, 0xCF))
        .size(1)
        .build();
    divider.attach_to(&mut list);

    list.layout_items(PixelRect::new(0, 0, 360, 640), ITEM_HEIGHT);

    println!("{:?}", list);
    println!();
    println!("Items:");
    for child in list.children() {
        println!(
            "  #{:<2} bounds {}  inset {:?}",
            child.position,
            child.bounds,
            list.item_offsets(child.position)
        );
    }

    let mut painter = RecordingPainter::new();
    list.paint(&mut painter);

    println!();
    println!("Paint operations:");
    for op in painter.ops() {
        match op {
            PaintOp::Fill { rect, color } => println!("  fill  {rect} {color}"),
            PaintOp::Image { key, rect, tint } => println!("  image {key} {rect} tint={tint:?}"),
        }
    }

    let stats = painter.stats();
    println!();
    println!("{} fills, {} images", stats.fills, stats.images);
    Ok(())
}
