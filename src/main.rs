use adsflow::config::{AppConfig, SourceKind, stock_config_toml};
use adsflow::copywriter::TemplateCopywriter;
use adsflow::export::export_bundle;
use adsflow::imaging::Quality;
use adsflow::loader::SourceRef;
use adsflow::output;
use adsflow::process::{Processor, generate_copy, sync};
use adsflow::source::{DirectorySource, PhotoSource, SampleFeed};
use adsflow::state::{AppState, Event, apply};
use adsflow::types::MediaOrigin;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adsflow")]
#[command(about = "Ad-creative automation for small-business social sellers")]
#[command(long_about = "\
Ad-creative automation for small-business social sellers

Product photos come in from a photo source, get re-cropped into the two
standard ad canvases (1080x1080 feed, 1080x1920 story), pick up marketing
copy, and leave as placement-ready bundles.

Workspace layout:

  .adsflow/
  ├── catalog.json             # Catalog manifest (channel state + items)
  └── media/
      ├── <id>-square.jpg      # 1:1 crop
      └── <id>-story.jpg       # 9:16 crop

Run 'adsflow gen-config' to generate a documented adsflow.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "adsflow.toml", global = true)]
    config: PathBuf,

    /// Workspace directory (catalog manifest + generated media)
    #[arg(long, default_value = ".adsflow", global = true)]
    workspace: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pull new photos from the configured source and process them
    Sync,
    /// Re-crop a single image (URL, data URL, or path) without the catalog
    Recrop {
        /// Source reference
        source: String,
        /// Output directory for the two crops
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Generate ad copy for a catalog item
    Copy {
        /// Item id (see `adsflow list`)
        id: String,
        /// Product name to write copy for (defaults to the item's name)
        #[arg(long)]
        name: Option<String>,
    },
    /// Rename a catalog item's product
    Rename { id: String, name: String },
    /// Remove an item and its generated crops
    Remove { id: String },
    /// List the catalog
    List,
    /// Show catalog counts and channel state
    Status,
    /// Export an item's placement-ready ad bundle
    Export {
        id: String,
        /// Output directory
        #[arg(long, default_value = "exports")]
        out: PathBuf,
    },
    /// Store channel credentials and mark the channel connected
    Connect { token: String, channel: String },
    /// Drop the channel connection (credentials are kept)
    Disconnect,
    /// Print a stock adsflow.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let catalog_path = cli.workspace.join("catalog.json");
    let media_dir = cli.workspace.join("media");

    match cli.command {
        Command::Sync => {
            let config = AppConfig::load(&cli.config)?;
            let mut state = AppState::load(&catalog_path)?;
            std::fs::create_dir_all(&cli.workspace)?;

            let (mut source, origin) = build_source(&config, &state)?;
            let processor = Processor::new(Quality::new(config.images.quality));
            let mut rng = SmallRng::from_entropy();

            let items = sync(source.as_mut(), &processor, origin, &media_dir, &mut rng)?;
            output::print_sync_output(&items);

            state = apply(state, Event::PhotosImported(items));
            state.save(&catalog_path)?;
        }
        Command::Recrop { source, out } => {
            let config = AppConfig::load(&cli.config)?;
            let processor = Processor::new(Quality::new(config.images.quality));
            let source_ref = SourceRef::parse(&source);
            let pair = processor.process(&source_ref)?;

            std::fs::create_dir_all(&out)?;
            let stem = recrop_stem(&source_ref);
            let square = out.join(format!("{stem}-square.jpg"));
            let story = out.join(format!("{stem}-story.jpg"));
            pair.square.write_to(&square)?;
            pair.story.write_to(&story)?;
            println!("square: {}", square.display());
            println!("story: {}", story.display());
        }
        Command::Copy { id, name } => {
            let mut state = AppState::load(&catalog_path)?;
            let item = state
                .find(&id)
                .ok_or_else(|| format!("no catalog item with id '{id}'"))?;

            let name = name
                .or_else(|| item.product_name.clone())
                .ok_or("item has no product name; pass one with --name")?;

            let copy = generate_copy(&TemplateCopywriter, item, &media_dir, &name)?;
            println!("{}", output::render_post_text(&copy));

            state = apply(
                state,
                Event::ProductRenamed {
                    id: id.clone(),
                    name,
                },
            );
            state = apply(state, Event::CopyAttached { id, copy });
            state.save(&catalog_path)?;
        }
        Command::Rename { id, name } => {
            let mut state = AppState::load(&catalog_path)?;
            if state.find(&id).is_none() {
                return Err(format!("no catalog item with id '{id}'").into());
            }
            state = apply(state, Event::ProductRenamed { id, name });
            state.save(&catalog_path)?;
        }
        Command::Remove { id } => {
            let mut state = AppState::load(&catalog_path)?;
            let Some(item) = state.find(&id) else {
                return Err(format!("no catalog item with id '{id}'").into());
            };
            for crop in [&item.square_path, &item.story_path].into_iter().flatten() {
                let path = media_dir.join(crop);
                if let Err(err) = std::fs::remove_file(&path) {
                    log::warn!("could not remove {}: {}", path.display(), err);
                }
            }
            state = apply(state, Event::MediaRemoved { id: id.clone() });
            state.save(&catalog_path)?;
            println!("Removed {id}.");
        }
        Command::List => {
            let state = AppState::load(&catalog_path)?;
            output::print_catalog_output(&state.catalog);
        }
        Command::Status => {
            let state = AppState::load(&catalog_path)?;
            output::print_status_output(&state.stats(), &state.channel);
        }
        Command::Export { id, out } => {
            let state = AppState::load(&catalog_path)?;
            let item = state
                .find(&id)
                .ok_or_else(|| format!("no catalog item with id '{id}'"))?;
            let bundle = export_bundle(item, &media_dir, &out)?;
            println!("square: {}", bundle.square.display());
            println!("story: {}", bundle.story.display());
            if let Some(post) = bundle.post {
                println!("post: {}", post.display());
            }
        }
        Command::Connect { token, channel } => {
            let mut state = AppState::load(&catalog_path)?;
            std::fs::create_dir_all(&cli.workspace)?;
            state = apply(
                state,
                Event::ChannelConnected {
                    bot_token: token,
                    channel_id: channel,
                },
            );
            if state.channel.connected {
                println!("Channel {} connected.", state.channel.channel_id);
            } else {
                println!("Empty token; channel stays disconnected.");
            }
            state.save(&catalog_path)?;
        }
        Command::Disconnect => {
            let mut state = AppState::load(&catalog_path)?;
            std::fs::create_dir_all(&cli.workspace)?;
            state = apply(state, Event::ChannelDisconnected);
            state.save(&catalog_path)?;
            println!("Channel disconnected.");
        }
        Command::GenConfig => {
            print!("{}", stock_config_toml());
        }
    }

    Ok(())
}

/// Build the configured photo source and the origin tag for its items.
fn build_source(
    config: &AppConfig,
    state: &AppState,
) -> Result<(Box<dyn PhotoSource>, MediaOrigin), Box<dyn Error>> {
    match config.source.kind {
        SourceKind::Sample => {
            let feed = match config.source.seed {
                Some(seed) => SampleFeed::seeded(seed),
                None => SampleFeed::new(),
            };
            Ok((Box::new(feed), MediaOrigin::Channel))
        }
        SourceKind::Directory => {
            let root = config
                .source
                .directory
                .clone()
                .ok_or("source.directory is not set")?;
            let mut source = DirectorySource::new(root);
            // Photos already in the catalog are not new
            source.mark_seen(
                state
                    .catalog
                    .iter()
                    .map(|item| PathBuf::from(&item.original_url)),
            );
            Ok((Box::new(source), MediaOrigin::Upload))
        }
    }
}

/// File-name stem for one-shot recrop output.
fn recrop_stem(source: &SourceRef) -> String {
    match source {
        SourceRef::Path(path) => path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("photo")
            .to_string(),
        _ => "photo".to_string(),
    }
}
