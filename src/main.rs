//! Headless background-pane driver: ranks a catalog file and applies one
//! selection command against the persisted background state.
use std::path::PathBuf;

use mapreview::imagery::{
    BackgroundSelector, ChooseOutcome, CycleDirection, ListFilter, SourceId, StaticCatalog,
};
use mapreview::storage::FileStore;
use mapreview::{config, logging};

const USAGE: &str = "usage: mapreview <catalog.json> [choose <id> | next | previous | switch | favorite <id> | custom <template>]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let mut args = std::env::args().skip(1);
    let Some(catalog_path) = args.next().map(PathBuf::from) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let command: Vec<String> = args.collect();

    let settings = config::load_or_default()?;
    tracing::debug!("Loaded settings: {settings:?}");
    let catalog = StaticCatalog::from_json(&std::fs::read_to_string(&catalog_path)?)?;
    let mut store = FileStore::open_default()?;
    let mut selector = BackgroundSelector::new(Box::new(catalog));
    selector.restore(&store);

    let outcome = match command.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => None,
        ["choose", id] => Some(selector.choose(&SourceId::from(*id), &mut store)),
        ["next"] => Some(selector.cycle(CycleDirection::Next, &mut store)),
        ["previous"] => Some(selector.cycle(CycleDirection::Previous, &mut store)),
        ["switch"] => Some(selector.quick_switch(&mut store)),
        ["favorite", id] => {
            let starred = selector.toggle_favorite(&SourceId::from(*id), &mut store);
            println!("{id} {}", if starred { "starred" } else { "unstarred" });
            None
        }
        ["custom", template] => Some(selector.custom_changed(template, &mut store)),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    match outcome {
        Some(ChooseOutcome::OpenCustomEditor) => {
            println!("The custom background needs a template: mapreview <catalog> custom <url>");
        }
        Some(ChooseOutcome::Ignored) => println!("No such background"),
        _ => {}
    }

    for row in selector.rows(ListFilter::Base) {
        let marker = match (row.active, row.switch_target) {
            (true, _) => '*',
            (false, true) => '~',
            _ => ' ',
        };
        let star = if row.favorite { "★" } else { " " };
        println!("{marker}{star} {:<24} {}", row.id.as_str(), row.name);
    }
    Ok(())
}
