use std::{collections::HashSet, sync::Arc, time::Duration};

use anyhow::Result;
use chrono::Utc;
use fetcharr_types::{
    MatchPolicy, MediaKind, Profile, SearchCandidate, Want, WantState, WantTarget,
};
use serde::Deserialize;
use tokio::select;

use crate::{
    config::MatchingConfig, db::Database, metadata::Metadata, resolver::Resolver, sink::Sink,
    source::Source,
};

fn default_source_sink() -> String {
    "default".to_string()
}

#[derive(Deserialize, Clone)]
pub struct SearchConfig {
    /// how many days old can a result be to be considered; unset = no limit
    #[serde(default)]
    pub max_days_old: Option<u64>,
    /// minimum seeders required to consider a result
    /// usually 1
    pub min_seeders: u64,
    /// how many minutes between search scans
    pub search_minutes: u64,
    /// how many minutes between scans of the sink (i.e. transmission)
    /// for completed torrents.
    pub completion_check_minutes: u64,
    /// name of source to search, defaulting to `default`
    #[serde(default = "default_source_sink")]
    pub source: String,
    /// name of sink to fetch with, defaulting to `default`
    #[serde(default = "default_source_sink")]
    pub sink: String,
    /// name of metadata provider, defaulting to `default`
    #[serde(default = "default_source_sink")]
    pub metadata: String,
    /// download directory handed to the sink for movie wants
    #[serde(default)]
    pub movie_dir: Option<String>,
    /// download directory handed to the sink for tv wants
    #[serde(default)]
    pub tv_dir: Option<String>,
}

/// Terminal verdict of one processing pass over one want.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A torrent was added, persisted, and released.
    Acquired,
    /// Nothing survived the match predicate.
    NoCandidates,
    /// The search collaborator itself failed.
    SearchFailed,
    /// Matches existed but every acquisition attempt was rejected or failed.
    Exhausted,
}

pub struct Processor<I: Source, O: Sink, M: Metadata, R: Resolver> {
    source: I,
    sink: O,
    metadata: M,
    resolver: R,
    db: Arc<Database>,
    config: SearchConfig,
    matching: MatchingConfig,
}

impl<I: Source, O: Sink, M: Metadata, R: Resolver> Processor<I, O, M, R> {
    pub fn new(
        db: Arc<Database>,
        source: I,
        sink: O,
        metadata: M,
        resolver: R,
        config: SearchConfig,
        matching: MatchingConfig,
    ) -> Self {
        Self {
            source,
            sink,
            metadata,
            resolver,
            db,
            config,
            matching,
        }
    }

    pub async fn run(mut self) {
        let mut scan_interval = tokio::time::interval(Duration::from_secs(
            self.config.completion_check_minutes * 60,
        ));
        let mut search_interval =
            tokio::time::interval(Duration::from_secs(self.config.search_minutes * 60));
        loop {
            select! {
                _ = scan_interval.tick() => {
                    if let Err(e) = self.sweep_completed().await {
                        error!("failed to run completion scan: {:?}", e);
                    }
                },
                _ = search_interval.tick() => {
                    if let Err(e) = self.process_all().await {
                        error!("failed to run search: {:?}", e);
                    }
                },
            }
        }
    }

    /// One search scan over every want still in the `Wanted` state.
    pub async fn process_all(&mut self) -> Result<()> {
        info!("round starting");
        for mut want in self.db.list_want()? {
            if want.state != WantState::Wanted {
                continue;
            }
            let profile_name = want.profile.clone().unwrap_or_else(|| match want.target.kind() {
                MediaKind::Movie => self.matching.profile_movies.clone(),
                MediaKind::Tv => self.matching.profile_tv.clone(),
            });
            let Some(profile) = self.db.get_profile(&profile_name)? else {
                error!(
                    "missing/invalid profile '{}' for '{}'",
                    profile_name, want.target
                );
                continue;
            };
            let outcome = self.process_want(&mut want, &profile).await?;
            debug!("'{}' -> {:?}", want.target, outcome);
            match outcome {
                FetchOutcome::Acquired => {}
                FetchOutcome::SearchFailed => {
                    warn!("search failed for '{}', will retry next round", want.target);
                }
                FetchOutcome::NoCandidates | FetchOutcome::Exhausted => {
                    if matches!(want.target, WantTarget::TvSeason { .. }) {
                        if let Err(e) = self.fallback_to_episodes(&want).await {
                            error!(
                                "failed to expand season want '{}': {:?}",
                                want.key(),
                                e
                            );
                        }
                        continue;
                    }
                    want.last_attempt = Some(Utc::now());
                    self.db.save_want(&want)?;
                }
            }
        }
        self.db.flush().await?;
        Ok(())
    }

    /// One full pass for one want, with the apostrophe retry: a dry first
    /// pass on a title containing `'` re-runs once with apostrophes stripped
    /// from the query. Title comparison already ignores them on both passes.
    pub async fn process_want(
        &mut self,
        want: &mut Want,
        profile: &Profile,
    ) -> Result<FetchOutcome> {
        let outcome = self.attempt(want, profile, false).await?;
        if outcome == FetchOutcome::NoCandidates && want.target.title().contains('\'') {
            debug!("retrying '{}' without apostrophes", want.target);
            return self.attempt(want, profile, true).await;
        }
        Ok(outcome)
    }

    fn queries(target: &WantTarget) -> Vec<String> {
        match target {
            WantTarget::Movie { title, .. } => vec![title.clone()],
            WantTarget::TvSeason { title, .. } => vec![title.clone()],
            WantTarget::TvEpisode {
                title,
                season,
                episode,
                ..
            } => vec![
                title.clone(),
                format!("{} s{:02}e{:02}", title, season, episode),
            ],
        }
    }

    async fn attempt(
        &mut self,
        want: &mut Want,
        profile: &Profile,
        strip_apostrophes: bool,
    ) -> Result<FetchOutcome> {
        let target = want.target.clone();

        // Searching: union of per-query results, first occurrence kept.
        let mut raw: Vec<SearchCandidate> = vec![];
        let mut seen = HashSet::new();
        let mut search_failed = false;
        for query in Self::queries(&target) {
            let query = if strip_apostrophes {
                query.replace('\'', "")
            } else {
                query
            };
            match self.source.search(target.kind(), &query).await {
                Ok(items) => {
                    for item in items {
                        if seen.insert(item.title.clone()) {
                            raw.push(item);
                        }
                    }
                }
                Err(e) => {
                    error!("failure to search '{}': {:?}", query, e);
                    search_failed = true;
                }
            }
        }
        if search_failed && raw.is_empty() {
            return Ok(FetchOutcome::SearchFailed);
        }

        // Filtering: seeders/age pre-filters, then the match predicate.
        let policy = MatchPolicy {
            profile,
            allow_hardcoded_subs: self.matching.allow_hardcoded_subs,
            exclude_keywords: &self.matching.exclude_keywords,
        };
        let mut matched: Vec<SearchCandidate> = vec![];
        for item in raw {
            if item.seeders < self.config.min_seeders {
                continue;
            }
            if let (Some(max_days), Some(date)) = (self.config.max_days_old, item.date) {
                let since = Utc::now().signed_duration_since(date.with_timezone(&Utc));
                if since > chrono::Duration::days(max_days as i64) {
                    continue;
                }
            }
            match policy.evaluate(&target, &item.title) {
                Ok(release) => {
                    debug!(
                        "accepted '{}' via rule '{}' ({}, {})",
                        item.title, release.rule, release.quality, release.resolution
                    );
                    matched.push(item);
                }
                Err(reason) => debug!("rejected '{}': {}", item.title, reason),
            }
        }
        if matched.is_empty() {
            return Ok(FetchOutcome::NoCandidates);
        }

        // Ranking: most seeders first; stable sort keeps the earlier
        // occurrence ahead on ties.
        matched.sort_by(|a, b| b.seeders.cmp(&a.seeders));

        let download_dir = match target.kind() {
            MediaKind::Movie => self.config.movie_dir.clone(),
            MediaKind::Tv => self.config.tv_dir.clone(),
        };
        for candidate in matched {
            let Some(locator) = candidate.locator() else {
                debug!("'{}' has no usable locator", candidate.title);
                continue;
            };
            let url = match self.resolver.resolve(locator).await {
                Ok(x) => x,
                Err(e) => {
                    warn!("failed to resolve '{}': {:?}", candidate.title, e);
                    continue;
                }
            };
            let info = match self.sink.add(&url, true, download_dir.as_deref()).await {
                Ok(x) => x,
                Err(e) => {
                    warn!("failed to add torrent '{}': {:?}", candidate.title, e);
                    continue;
                }
            };
            if self.db.denylist_contains(&info.hash)? {
                info!(
                    "'{}' is denylisted, removing and trying next candidate",
                    candidate.title
                );
                self.sink.remove(info.id, true).await?;
                continue;
            }
            want.state = WantState::Snatched {
                torrent_id: info.id,
                hash: info.hash,
                name: info.name,
            };
            want.last_attempt = Some(Utc::now());
            self.db.save_want(want)?;
            self.db.flush().await?;
            // Persisted before release so a crash leaves a resumable record.
            self.sink.resume(info.id).await?;
            info!("snatched '{}' for '{}'", candidate.title, want.target);
            return Ok(FetchOutcome::Acquired);
        }
        Ok(FetchOutcome::Exhausted)
    }

    /// Season-to-episodes fallback: enumerate the season from metadata,
    /// get-or-create one episode want per aired episode, then drop the
    /// season want. Safe to re-run; existing episode wants are kept as-is.
    async fn fallback_to_episodes(&mut self, want: &Want) -> Result<()> {
        let WantTarget::TvSeason {
            tmdb_show_id,
            title,
            season,
        } = &want.target
        else {
            return Ok(());
        };
        let episodes = self.metadata.list_episodes(*tmdb_show_id, *season).await?;
        let today = Utc::now().date_naive();
        let mut created = 0usize;
        for ep in episodes {
            // unaired episodes cannot match anything yet
            if !matches!(ep.air_date, Some(date) if date <= today) {
                continue;
            }
            let episode_want = Want {
                target: WantTarget::TvEpisode {
                    tmdb_show_id: *tmdb_show_id,
                    title: title.clone(),
                    season: *season,
                    episode: ep.episode_number,
                },
                profile: want.profile.clone(),
                state: WantState::Wanted,
                added: Utc::now(),
                last_attempt: None,
            };
            if self.db.exists_want(&episode_want.key())? {
                continue;
            }
            self.db.save_want(&episode_want)?;
            created += 1;
        }
        self.db.delete_want(&want.key())?;
        self.db.flush().await?;
        info!(
            "season want '{}' expanded into {} episode wants",
            want.target, created
        );
        Ok(())
    }

    /// Completion scan: snatched wants whose torrent the client reports
    /// finished become collected, and the torrent leaves the client with
    /// its data intact.
    pub async fn sweep_completed(&mut self) -> Result<()> {
        debug!("completion scan starting");
        for id in self.sink.finished().await? {
            let Some(mut want) = self.db.get_want_from_torrent_id(id)? else {
                continue;
            };
            if !matches!(want.state, WantState::Snatched { .. }) {
                continue;
            }
            info!("collected '{}'", want.target);
            want.state = WantState::Collected;
            self.db.clear_active(id)?;
            self.db.save_want(&want)?;
            self.sink.remove(id, false).await?;
        }
        self.db.flush().await?;
        Ok(())
    }

    /// Operator entry point: denylist whatever a want currently has
    /// snatched, drop the torrent and its data, and put the want back in
    /// the search rotation.
    pub async fn deny_and_retry(&mut self, key: &str) -> Result<()> {
        let Some(mut want) = self.db.get_want(key)? else {
            bail!("no want '{}'", key);
        };
        let WantState::Snatched {
            torrent_id, hash, ..
        } = want.state.clone()
        else {
            bail!("want '{}' has nothing snatched", key);
        };
        self.db.denylist_add(&hash)?;
        self.db.clear_active(torrent_id)?;
        want.state = WantState::Wanted;
        want.last_attempt = None;
        self.db.save_want(&want)?;
        self.sink.remove(torrent_id, true).await?;
        self.db.flush().await?;
        info!("denylisted {} and reset '{}'", hash, want.target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fetcharr_types::{builtin_profiles, EpisodeRef};

    use crate::sink::TorrentInfo;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    struct StaticSource {
        results: Vec<SearchCandidate>,
        queries: Mutex<Vec<String>>,
        apostrophe_blind: bool,
    }

    impl StaticSource {
        fn new(results: Vec<SearchCandidate>) -> Self {
            Self {
                results,
                queries: Mutex::new(vec![]),
                apostrophe_blind: false,
            }
        }
    }

    #[async_trait::async_trait]
    impl Source for StaticSource {
        async fn search(&self, _kind: MediaKind, query: &str) -> Result<Vec<SearchCandidate>> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.apostrophe_blind && query.contains('\'') {
                return Ok(vec![]);
            }
            Ok(self.results.clone())
        }
    }

    #[derive(Default)]
    struct MockSink {
        next_id: i64,
        added: Vec<TorrentInfo>,
        paused_adds: Vec<bool>,
        dirs: Vec<Option<String>>,
        resumed: Vec<i64>,
        removed: Vec<(i64, bool)>,
        finished_ids: Vec<i64>,
    }

    #[async_trait::async_trait]
    impl Sink for MockSink {
        async fn add(
            &mut self,
            torrent_url: &str,
            paused: bool,
            download_dir: Option<&str>,
        ) -> Result<TorrentInfo> {
            self.next_id += 1;
            let info = TorrentInfo {
                id: self.next_id,
                hash: format!("hash:{}", torrent_url),
                name: torrent_url.to_string(),
            };
            self.added.push(info.clone());
            self.paused_adds.push(paused);
            self.dirs.push(download_dir.map(str::to_string));
            Ok(info)
        }

        async fn resume(&mut self, id: i64) -> Result<()> {
            self.resumed.push(id);
            Ok(())
        }

        async fn remove(&mut self, id: i64, delete_data: bool) -> Result<()> {
            self.removed.push((id, delete_data));
            Ok(())
        }

        async fn finished(&mut self) -> Result<Vec<i64>> {
            Ok(self.finished_ids.clone())
        }
    }

    struct MockMetadata {
        episodes: Vec<EpisodeRef>,
    }

    #[async_trait::async_trait]
    impl Metadata for MockMetadata {
        async fn list_episodes(&self, _show_id: u64, _season: u32) -> Result<Vec<EpisodeRef>> {
            Ok(self.episodes.clone())
        }
    }

    struct PassResolver;

    #[async_trait::async_trait]
    impl Resolver for PassResolver {
        async fn resolve(&self, locator: &str) -> Result<String> {
            Ok(locator.to_string())
        }
    }

    fn search_config() -> SearchConfig {
        SearchConfig {
            max_days_old: None,
            min_seeders: 1,
            search_minutes: 1,
            completion_check_minutes: 1,
            source: "default".to_string(),
            sink: "default".to_string(),
            metadata: "default".to_string(),
            movie_dir: None,
            tv_dir: Some("/downloads/tv".to_string()),
        }
    }

    fn matching_config() -> MatchingConfig {
        MatchingConfig {
            profile_movies: "any".to_string(),
            profile_tv: "any".to_string(),
            allow_hardcoded_subs: false,
            exclude_keywords: vec![],
        }
    }

    fn scratch_db() -> Arc<Database> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .expect("temp sled db");
        let db = Database::new(db);
        for profile in builtin_profiles() {
            db.save_profile(&profile).unwrap();
        }
        Arc::new(db)
    }

    fn processor(
        db: Arc<Database>,
        source: StaticSource,
        metadata: MockMetadata,
    ) -> Processor<StaticSource, MockSink, MockMetadata, PassResolver> {
        Processor::new(
            db,
            source,
            MockSink::default(),
            metadata,
            PassResolver,
            search_config(),
            matching_config(),
        )
    }

    fn no_metadata() -> MockMetadata {
        MockMetadata { episodes: vec![] }
    }

    fn cand(title: &str, seeders: u64) -> SearchCandidate {
        SearchCandidate {
            title: title.to_string(),
            seeders,
            size: 0,
            date: None,
            magnet_uri: Some(format!("magnet:?xt=urn:btih:{}", title.replace('.', ""))),
            link: None,
        }
    }

    fn episode_want() -> Want {
        Want::new(WantTarget::TvEpisode {
            tmdb_show_id: 60625,
            title: "Rick and Morty".to_string(),
            season: 1,
            episode: 14,
        })
    }

    #[tokio::test]
    async fn test_acquires_best_seeded_match() {
        let db = scratch_db();
        let source = StaticSource::new(vec![
            cand("Rick.and.Morty.S01E05.720p.HDTV.x264", 100),
            cand("Rick.and.Morty.S01E14.720p.HDTV.x264", 10),
            cand("Rick.and.Morty.S01E14.1080p.WEB-DL.x264", 50),
        ]);
        let mut proc = processor(db.clone(), source, no_metadata());
        let mut want = episode_want();
        db.save_want(&want).unwrap();
        let profile = db.get_profile("any").unwrap().unwrap();

        let outcome = proc.process_want(&mut want, &profile).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Acquired);

        // added paused into the tv dir, then released
        assert_eq!(proc.sink.added.len(), 1);
        assert!(proc.sink.paused_adds[0]);
        assert_eq!(proc.sink.dirs[0].as_deref(), Some("/downloads/tv"));
        assert_eq!(proc.sink.resumed, vec![1]);

        // the wrong episode loses despite more seeders
        assert!(proc.sink.added[0].name.contains("S01E14"));
        assert!(proc.sink.added[0].name.contains("1080p"));

        // two queries: bare title and sXXeYY form
        let queries = proc.source.queries.lock().unwrap().clone();
        assert_eq!(
            queries,
            vec!["Rick and Morty".to_string(), "Rick and Morty s01e14".to_string()]
        );

        // persisted as snatched under the torrent id
        let stored = db.get_want_from_torrent_id(1).unwrap().unwrap();
        assert!(matches!(stored.state, WantState::Snatched { torrent_id: 1, .. }));
    }

    #[tokio::test]
    async fn test_denylisted_hash_moves_to_next_candidate() {
        let db = scratch_db();
        let top = cand("Rick.and.Morty.S01E14.1080p.WEB-DL.x264", 50);
        let runner_up = cand("Rick.and.Morty.S01E14.720p.HDTV.x264", 10);
        // denylist what the sink will report for the top candidate
        db.denylist_add(&format!("hash:{}", top.magnet_uri.as_deref().unwrap()))
            .unwrap();
        let source = StaticSource::new(vec![top, runner_up]);
        let mut proc = processor(db.clone(), source, no_metadata());
        let mut want = episode_want();
        db.save_want(&want).unwrap();
        let profile = db.get_profile("any").unwrap().unwrap();

        let outcome = proc.process_want(&mut want, &profile).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Acquired);

        // first add was torn down with its data, second one stuck
        assert_eq!(proc.sink.added.len(), 2);
        assert_eq!(proc.sink.removed, vec![(1, true)]);
        assert_eq!(proc.sink.resumed, vec![2]);
        assert!(matches!(
            want.state,
            WantState::Snatched { torrent_id: 2, .. }
        ));
    }

    #[tokio::test]
    async fn test_exhausted_when_all_denylisted() {
        let db = scratch_db();
        let only = cand("Rick.and.Morty.S01E14.720p.HDTV.x264", 10);
        db.denylist_add(&format!("hash:{}", only.magnet_uri.as_deref().unwrap()))
            .unwrap();
        let source = StaticSource::new(vec![only]);
        let mut proc = processor(db.clone(), source, no_metadata());
        let mut want = episode_want();
        db.save_want(&want).unwrap();
        let profile = db.get_profile("any").unwrap().unwrap();

        let outcome = proc.process_want(&mut want, &profile).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Exhausted);
        assert_eq!(want.state, WantState::Wanted);
    }

    #[tokio::test]
    async fn test_season_fallback_is_idempotent() {
        let db = scratch_db();
        let aired = |n: u32, date: &str| EpisodeRef {
            episode_number: n,
            air_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            provider_episode_id: n as u64,
        };
        let metadata = MockMetadata {
            episodes: vec![
                aired(1, "2018-03-01"),
                aired(2, "2018-03-08"),
                EpisodeRef {
                    episode_number: 3,
                    air_date: None,
                    provider_episode_id: 3,
                },
            ],
        };
        let source = StaticSource::new(vec![]);
        let mut proc = processor(db.clone(), source, metadata);
        let want = Want::new(WantTarget::TvSeason {
            tmdb_show_id: 73021,
            title: "Atlanta".to_string(),
            season: 2,
        });
        db.save_want(&want).unwrap();

        proc.process_all().await.unwrap();

        assert!(!db.exists_want("tv-73021-S02").unwrap());
        assert!(db.exists_want("tv-73021-S02E01").unwrap());
        assert!(db.exists_want("tv-73021-S02E02").unwrap());
        // the unaired episode gets no want yet
        assert!(!db.exists_want("tv-73021-S02E03").unwrap());

        // a second expansion leaves existing episode wants untouched
        let before = db.get_want("tv-73021-S02E01").unwrap().unwrap().added;
        proc.fallback_to_episodes(&want).await.unwrap();
        let after = db.get_want("tv-73021-S02E01").unwrap().unwrap().added;
        assert_eq!(before, after);
        assert_eq!(
            db.list_want()
                .unwrap()
                .iter()
                .filter(|w| matches!(w.target, WantTarget::TvEpisode { .. }))
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn test_apostrophe_retry() {
        let db = scratch_db();
        let mut source =
            StaticSource::new(vec![cand("The.Handmaids.Tale.S01E01.720p.HDTV.x264", 5)]);
        source.apostrophe_blind = true;
        let mut proc = processor(db.clone(), source, no_metadata());
        let mut want = Want::new(WantTarget::TvEpisode {
            tmdb_show_id: 69478,
            title: "The Handmaid's Tale".to_string(),
            season: 1,
            episode: 1,
        });
        db.save_want(&want).unwrap();
        let profile = db.get_profile("any").unwrap().unwrap();

        let outcome = proc.process_want(&mut want, &profile).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Acquired);

        let queries = proc.source.queries.lock().unwrap().clone();
        assert!(queries.iter().any(|q| q.contains('\'')));
        assert!(queries.iter().any(|q| q == "The Handmaids Tale"));
    }

    #[tokio::test]
    async fn test_completion_sweep() {
        let db = scratch_db();
        let source = StaticSource::new(vec![]);
        let mut proc = processor(db.clone(), source, no_metadata());
        let mut want = episode_want();
        want.state = WantState::Snatched {
            torrent_id: 7,
            hash: "abc123".to_string(),
            name: "Rick.and.Morty.S01E14.720p".to_string(),
        };
        db.save_want(&want).unwrap();
        proc.sink.finished_ids = vec![7];

        proc.sweep_completed().await.unwrap();

        let stored = db.get_want(&want.key()).unwrap().unwrap();
        assert_eq!(stored.state, WantState::Collected);
        assert!(db.get_want_from_torrent_id(7).unwrap().is_none());
        // data stays on disk, only the client entry goes
        assert_eq!(proc.sink.removed, vec![(7, false)]);
    }

    #[tokio::test]
    async fn test_deny_and_retry() {
        let db = scratch_db();
        let source = StaticSource::new(vec![]);
        let mut proc = processor(db.clone(), source, no_metadata());
        let mut want = episode_want();
        want.state = WantState::Snatched {
            torrent_id: 9,
            hash: "feedface".to_string(),
            name: "Rick.and.Morty.S01E14.CAM".to_string(),
        };
        db.save_want(&want).unwrap();

        proc.deny_and_retry(&want.key()).await.unwrap();

        assert!(db.denylist_contains("feedface").unwrap());
        let stored = db.get_want(&want.key()).unwrap().unwrap();
        assert_eq!(stored.state, WantState::Wanted);
        assert_eq!(proc.sink.removed, vec![(9, true)]);
    }

    #[tokio::test]
    async fn test_min_seeders_filter() {
        let db = scratch_db();
        let source = StaticSource::new(vec![cand("Rick.and.Morty.S01E14.720p.HDTV.x264", 0)]);
        let mut proc = processor(db.clone(), source, no_metadata());
        let mut want = episode_want();
        let profile = db.get_profile("any").unwrap().unwrap();

        let outcome = proc.process_want(&mut want, &profile).await.unwrap();
        assert_eq!(outcome, FetchOutcome::NoCandidates);
    }
}
