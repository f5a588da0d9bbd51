//! Map-Object Werkzeug.
//!
//! Liest und schreibt MapObject-Listen im Binärformat.
//! Aufruf:
//!   map-object decode <datei.bin>
//!   map-object encode <datei.json> <ziel.bin> [--fill-defaults]

use anyhow::{bail, Context, Result};
use map_object::{decode_map_objects, encode_map_objects, MapObject, StringTable};

fn main() -> Result<()> {
    AppRunner::run(std::env::args().skip(1).collect())
}

struct AppRunner;

impl AppRunner {
    fn run(args: Vec<String>) -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::debug!("map-object v{} startet...", env!("CARGO_PKG_VERSION"));

        match args.first().map(String::as_str) {
            Some("decode") => {
                let Some(path) = args.get(1) else {
                    bail!("Aufruf: map-object decode <datei.bin>");
                };
                Self::decode(path)
            }
            Some("encode") => {
                let (Some(source), Some(target)) = (args.get(1), args.get(2)) else {
                    bail!("Aufruf: map-object encode <datei.json> <ziel.bin> [--fill-defaults]");
                };
                let fill_defaults = args.iter().skip(3).any(|arg| arg == "--fill-defaults");
                Self::encode(source, target, fill_defaults)
            }
            Some(other) => bail!("Unbekannter Befehl: '{}'", other),
            None => bail!("Befehl fehlt: decode | encode"),
        }
    }

    /// Binärdatei → JSON auf stdout
    fn decode(path: &str) -> Result<()> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Datei nicht lesbar: {}", path))?;
        let objects = decode_map_objects(&bytes)
            .with_context(|| format!("Ungueltige MapObject-Datei: {}", path))?;

        log::info!("{} MapObjects gelesen aus {}", objects.len(), path);
        println!("{}", serde_json::to_string_pretty(&objects)?);
        Ok(())
    }

    /// JSON-Datei → Binärdatei
    fn encode(source: &str, target: &str, fill_defaults: bool) -> Result<()> {
        let json = std::fs::read_to_string(source)
            .with_context(|| format!("Datei nicht lesbar: {}", source))?;
        let mut objects: Vec<MapObject> = serde_json::from_str(&json)
            .with_context(|| format!("Ungueltiges JSON in {}", source))?;

        if fill_defaults {
            let strings = StringTable::load_from_file(&StringTable::config_path());
            for object in &mut objects {
                object.set_default_if_empty(&strings);
            }
        }

        let bytes = encode_map_objects(&objects);
        std::fs::write(target, &bytes)
            .with_context(|| format!("Datei nicht schreibbar: {}", target))?;

        log::info!(
            "{} MapObjects geschrieben nach {} ({} Bytes)",
            objects.len(),
            target,
            bytes.len()
        );
        Ok(())
    }
}
