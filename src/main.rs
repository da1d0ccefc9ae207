use boxpaint::{Canvas, Conf, Desktop};
use log::info;
use parking_lot::Mutex;

fn main() -> boxpaint::Result<()> {
    let mut logger = pretty_env_logger::formatted_timed_builder();
    logger.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let conf = Conf::default();
    let canvas = Canvas::new(conf.width, conf.height);
    let bounds = canvas.bounds();
    let canvas = Mutex::new(canvas);

    {
        let mut desktop = Desktop::new(&canvas).with_background(conf.background, bounds);
        for &rect in &conf.painters {
            desktop.create_painter(rect);
        }
        desktop.paint();
        info!("painted {} rectangles", desktop.len());
    }

    let canvas = canvas.into_inner();
    #[cfg(feature = "window")]
    boxpaint::window::show(&conf, &canvas)?;
    #[cfg(not(feature = "window"))]
    info!("built without a window, final fill colour {:?}", canvas.fill_colour());
    Ok(())
}
