use std::path::Path;

use bilevel_core::binarize::Threshold;
use bilevel_core::crop::CropRect;
use bilevel_core::pipeline::PipelineState;
use bilevel_core::stats::PixelStatistics;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(
    input: &Path,
    output: &Path,
    pipeline: &PipelineState,
    crop: Option<&CropRect>,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Binarization"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    if let Some(original) = pipeline.original() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Image"),
            s.value.apply_to(original)
        );
    }
    match crop {
        Some(rect) => println!(
            "  {:<14}{}",
            s.label.apply_to("Crop"),
            s.value.apply_to(rect)
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Crop"),
            s.disabled.apply_to("none")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(pipeline.threshold())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Stage"),
        s.value.apply_to(pipeline.stage())
    );
    println!();
}

pub fn print_stats_summary(stats: &PixelStatistics, threshold: Threshold) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to("Statistics"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(threshold)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Total"),
        s.value.apply_to(stats.total_pixels)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Black"),
        s.value.apply_to(format!(
            "{} ({:.1}%)",
            stats.black_count,
            stats.black_percentage()
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("White"),
        s.value.apply_to(format!(
            "{} ({:.1}%)",
            stats.white_count,
            stats.white_percentage()
        ))
    );
    match stats.ratio {
        Some(r) => println!(
            "    {:<12}{}",
            s.label.apply_to("White:Black"),
            s.value.apply_to(format!("{r:.2}:1"))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("White:Black"),
            s.disabled.apply_to("N/A")
        ),
    }
    println!();
}
