use ndspace_launch::{
    LaunchLimits, NdRange, Range, aligned_allocation_size, bucketed_allocation_size,
};
use ndspace_types::ceil_division;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let limits = LaunchLimits::default();
    let image = Range::<2>::new(1920, 1080);
    let launch = NdRange::rounded_up(image, Range::<2>::new(16, 16))?;
    let dispatch = launch.dispatch_size(&limits)?;
    println!("image {image}: {} groups, dispatch {dispatch:?}", launch.group_count());

    let bytes = (image.size() * std::mem::size_of::<[f32; 4]>()) as u64;
    println!(
        "output buffer: {} bytes aligned, {} bytes bucketed",
        aligned_allocation_size(bytes, 256)?,
        bucketed_allocation_size(bytes)?
    );

    let flat = limits.distribute_groups(ceil_division(launch.global_size() as u64, 256) as usize)?;
    println!("flattened dispatch: {flat:?}");

    Ok(())
}
