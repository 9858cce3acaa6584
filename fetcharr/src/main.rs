use std::sync::Arc;

use clap::Parser;
use config::CONFIG;
use fetcharr_types::{builtin_profiles, Profile, Want};
use log::LevelFilter;
use metadata::{Metadata, TmdbClient};
use processor::Processor;
use resolver::HttpResolver;
use sink::{Sink, TransmissionClient};
use source::{Source, TorznabClient};

use crate::{
    db::Database, metadata::MetadataConfig, sink::SinkConfig, source::SourceConfig,
};

mod config;
mod db;
mod metadata;
mod processor;
mod resolver;
mod sink;
mod source;

/// Media watcher and torrent fetcher
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Dumps the contents of the database and exits
    #[clap(short, long)]
    dump: bool,

    /// Denylists the snatched torrent of the given want key and re-queues it
    #[clap(long, value_name = "WANT_KEY")]
    deny_retry: Option<String>,

    /// Increases log level
    #[clap(short, long)]
    verbose: bool,
}

#[macro_use]
extern crate anyhow;

#[macro_use]
extern crate log;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_module("transmission_rpc", LevelFilter::Warn)
        .parse_env(
            env_logger::Env::default().default_filter_or(if args.verbose {
                "debug"
            } else {
                "info"
            }),
        )
        .init();

    let db = sled::open(&*CONFIG.db_file).expect("sled failed to init db");
    if args.dump {
        println!("dumping");
        for (key, value) in db.iter().map(|x| x.unwrap()) {
            let key = std::str::from_utf8(&key[..]).unwrap();
            let value = std::str::from_utf8(&value[..]).unwrap();
            println!("{} = {}", key, value);
        }
        return;
    }
    let db = Arc::new(Database::new(db));

    let Some(source_config) = CONFIG.sources.get(&CONFIG.search.source) else {
        error!("invalid source {}, not found", CONFIG.search.source);
        std::process::exit(1);
    };
    let Some(sink_config) = CONFIG.sinks.get(&CONFIG.search.sink) else {
        error!("invalid sink {}, not found", CONFIG.search.sink);
        std::process::exit(1);
    };
    let Some(metadata_config) = CONFIG.metadata.get(&CONFIG.search.metadata) else {
        error!("invalid metadata provider {}, not found", CONFIG.search.metadata);
        std::process::exit(1);
    };

    let sink: Box<dyn Sink + Send + Sync> = match sink_config {
        SinkConfig::Transmission(config) => Box::new(TransmissionClient::new(config.clone())),
    };
    let source: Box<dyn Source + Send + Sync> = match source_config {
        SourceConfig::Torznab(config) => Box::new(TorznabClient::new(config.clone())),
    };
    let metadata: Box<dyn Metadata + Send + Sync> = match metadata_config {
        MetadataConfig::Tmdb(config) => Box::new(TmdbClient::new(config.clone())),
    };

    for profile in builtin_profiles() {
        db.save_profile(&profile).expect("Failed to load profile");
    }
    for (name, members) in &CONFIG.profiles {
        let profile = Profile {
            name: name.clone(),
            members: members.clone(),
        };
        db.save_profile(&profile).expect("Failed to load profile");
    }
    for seed in &CONFIG.wants {
        let mut want = Want::new(seed.target.clone());
        want.profile = seed.profile.clone();
        // never clobber the state of a want already in flight
        if !db.exists_want(&want.key()).expect("Failed to read want") {
            db.save_want(&want).expect("Failed to load want");
        }
    }

    let mut processor = Processor::new(
        db.clone(),
        source,
        sink,
        metadata,
        HttpResolver::new(),
        CONFIG.search.clone(),
        CONFIG.matching.clone(),
    );
    if let Some(key) = &args.deny_retry {
        processor
            .deny_and_retry(key)
            .await
            .expect("deny-retry failed");
        return;
    }

    info!("running processor");
    processor.run().await;
}
