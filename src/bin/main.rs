extern crate phong_raytracer as root;

use root::parsing::config::{get_settings, TOMLConfig};
use root::parsing::construct_world;
use root::renderer::{output_film, NaiveRenderer};
use root::world::World;

#[macro_use]
extern crate log;
extern crate simplelog;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
}

fn construct_scene(config: &TOMLConfig) -> anyhow::Result<World> {
    construct_world(PathBuf::from(config.default_scene_file.clone()))
}

fn parse_log_level(level: String, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "trace" => LevelFilter::Trace,
        "error" => LevelFilter::Error,
        "debug" => LevelFilter::Debug,
        _ => default,
    }
}

fn main() {
    let opts = Opt::from_args();
    let term_log_level = parse_log_level(opts.print_log_level, LevelFilter::Warn);
    let write_log_level = parse_log_level(opts.write_log_level, LevelFilter::Info);

    CombinedLogger::init(vec![
        TermLogger::new(
            term_log_level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            write_log_level,
            simplelog::Config::default(),
            File::create("main.log").unwrap(),
        ),
    ])
    .unwrap();

    let mut config: TOMLConfig = match get_settings(&opts.config_file) {
        Ok(config) => config,
        Err(e) => {
            error!("couldn't read {}, {:?}", opts.config_file, e);
            return;
        }
    };

    let threads = config
        .render_settings
        .iter()
        .map(|settings| &settings.threads)
        .fold(1, |a, &b| a.max(b.unwrap_or(1)));
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()
        .unwrap();

    // command line override for the scene file
    config.default_scene_file = opts.scene_file.unwrap_or(config.default_scene_file);
    let world = match construct_scene(&config) {
        Ok(world) => Arc::new(world),
        Err(e) => {
            error!("fatal error parsing world, aborting. error is {:?}", e);
            return;
        }
    };

    if opts.dry_run {
        info!("dry run, skipping render");
        return;
    }

    let renderer = NaiveRenderer::new();
    for settings in config.render_settings.iter() {
        let film = renderer.render(world.clone(), settings);
        if let Err(e) = output_film(&film, settings) {
            error!("failed to write output, {:?}", e);
        }
    }
}
