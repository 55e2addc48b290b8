use std::io;

use mazegen::{
    app::App,
    error::AppError,
    logging,
    settings::{CarveMode, Settings},
};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazegen")]
struct Args {
    #[clap(short = 'n', long, help = "Generate one maze of this dimension and quit")]
    dimension: Option<i32>,
    #[clap(short, long, help = "Seed for reproducible mazes")]
    seed: Option<u64>,
    #[clap(long, action, help = "Shuffle the walls once instead of after every removal")]
    single_pass: bool,
    #[clap(long, action, help = "Print the finished maze as text instead of animating it")]
    no_animate: bool,
    #[clap(long, help = "Delay between removed walls in milliseconds")]
    delay_ms: Option<u64>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More verbose logging, can be repeated")]
    verbose: u8,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Show config in debug format and quit")]
    debug_config: bool,
}

impl Args {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(seed) = self.seed {
            settings = settings.set_seed(seed);
        }
        if self.single_pass {
            settings = settings.set_carve_mode(CarveMode::SinglePass);
        }
        if self.no_animate {
            settings = settings.set_animate(false);
        }
        if let Some(delay) = self.delay_ms {
            settings = settings.set_frame_delay_ms(delay);
        }

        let level = settings.get_log_level().raised(self.verbose);
        settings.set_log_level(level)
    }
}

fn main() -> Result<(), AppError> {
    better_panic::install();

    let args = Args::parse();
    let settings_path = Settings::default_path();

    logging::init();

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        println!("{}", settings_path.display());
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&settings_path)?);
        return Ok(());
    }

    let settings = args.apply(Settings::load_or_default(&settings_path));
    logging::get_logger().set_min_level(settings.get_log_level().to_level());

    let app = App::new(settings);
    let mut stdout = io::stdout();

    match args.dimension {
        Some(dimension) => {
            let dimension = app.prompt().check(dimension)?;
            app.run_once(dimension, &mut stdout)?;
        }
        None => {
            let generated = app.run_interactive(&mut io::stdin().lock(), &mut stdout)?;
            log::info!("generated {} mazes", generated);
        }
    }

    Ok(())
}
