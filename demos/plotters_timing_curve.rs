extern crate plotters;
use plotters::prelude::*;

extern crate timing_curve;
use timing_curve::{ControlPoint, CurveConfig, CurveScene, DragController, PixelPoint};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = CurveConfig::default();
    let mut model = config.model();
    let mapper = config.mapper()?;
    let drag = DragController::new(mapper, config.handle_diameter);

    // simulate dragging both handles into an ease-in-out-back shape
    drag.drag_to(&mut model, ControlPoint::First, PixelPoint::new(136.0, 226.0));
    drag.drag_to(&mut model, ControlPoint::Second, PixelPoint::new(64.0, -26.0));

    let scene = CurveScene::render(&model, &mapper, &config);
    let size = mapper.size();

    // the stroked curve in viewport pixels, flipped back so that up is up on the chart,
    // sampled about every 2 px along its length
    let cubic = scene.path.to_cubic();
    let nsteps = ((cubic.arclen(64) / 2.0).ceil() as usize).max(1);
    let curve_graph: Vec<(f64, f64)> = cubic
        .flatten(nsteps)
        .into_iter()
        .map(|p| (p.x, size - p.y))
        .collect();

    // eased progress over time, scaled to the viewport for comparison
    let timing = model.generate_timing_function(Some(config.color_change_duration));
    let progress_graph: Vec<(f64, f64)> = (0..=nsteps)
        .map(|i| {
            let x = i as f64 / nsteps as f64;
            (x * size, timing.ease(x) * size)
        })
        .collect();

    let root = BitMapBackend::new("timing_curve.png", (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let margin = size * 0.3;
    let mut chart = ChartBuilder::on(&root)
        .caption("Cubic Bezier Timing Curve", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-margin..(size + margin), -margin..(size + margin))?;

    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(curve_graph, &RED))?
        .label("curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(progress_graph, &BLUE))?
        .label("eased progress")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // control point handles with their labels
    for (marker, label) in scene.handles.iter().zip(scene.labels.iter()) {
        let coord = (marker.center.x, size - marker.center.y);
        let [r, g, b, a] = marker.fill;
        let fill = RGBColor((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8).mix(a as f64);
        chart.draw_series(std::iter::once(
            EmptyElement::at(coord)
                + Circle::new((0, 0), (marker.diameter / 2.0).round() as i32, fill.filled())
                + Text::new(label.clone(), (0, 15), ("sans-serif", 15).into_font()),
        ))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
