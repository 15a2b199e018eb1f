//! The verify → negotiate → fetch → unpack sequence.

use crate::error::{ErrorKind, Result};
use crate::report::RunReport;
use iconsmith_client::{FetchedArchive, HttpService, IconService, fetch_archive};
use iconsmith_config::Settings;
use iconsmith_session::SessionStore;
use iconsmith_session::store::FileStore;
use iconsmith_unpack::{extract, verify_outputs};
use tokio::fs;

/// Run the pipeline with the production backends: the HTTP service at the
/// configured host and the per-installation file session store.
pub async fn run(settings: &Settings) -> Result<RunReport> {
    let service = HttpService::new(&settings.host).map_err(ErrorKind::client)?;
    let store = FileStore::at_default_location().map_err(ErrorKind::session)?;
    run_with(&service, &store, settings).await
}

/// Run the pipeline against explicit service/store implementations.
///
/// Steps are atomic from the caller's perspective: the run either returns a
/// [`RunReport`] covering every step, or fails with the first step's error.
/// The downloaded archive lives in a scope-owned temporary file that is
/// removed on every exit path.
pub async fn run_with(
    service: &dyn IconService,
    store: &dyn SessionStore,
    settings: &Settings,
) -> Result<RunReport> {
    let mode = settings.extract_mode();

    tracing::info!("verifying output paths");
    let paths = verify_outputs(&mode, settings.force).await.map_err(ErrorKind::unpack)?;

    let config = fs::read(&settings.config)
        .await
        .map_err(|source| ErrorKind::ConfigFile { path: settings.config.clone(), source })?;

    let fetched = fetch_archive(service, store, &config).await.map_err(ErrorKind::client)?;
    let summary = extract(fetched.file.path(), &mode, &settings.exclude, settings.scss)
        .await
        .map_err(ErrorKind::unpack)?;

    let FetchedArchive { file, size, session } = fetched;
    // Explicit removal surfaces deletion errors; the drop guard covers the
    // error paths above.
    file.close().map_err(ErrorKind::Io)?;
    tracing::info!(%summary, "extraction complete");

    Ok(RunReport { paths, session, archive_bytes: size, extraction: summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconsmith_client::MockService;
    use iconsmith_session::store::MemoryStore;
    use iconsmith_unpack::DirStatus;
    use std::io::{Cursor, Write};
    use std::path::{Path, PathBuf};
    use zip::write::SimpleFileOptions;

    fn fixture_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        for (name, data) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
        cursor.into_inner()
    }

    fn settings_in(dir: &Path) -> Settings {
        let config = dir.join("config.json");
        std::fs::write(&config, b"{\"name\":\"icons\"}").unwrap();
        Settings { config, ..Settings::default() }
    }

    #[tokio::test]
    async fn test_selective_run_end_to_end() {
        let temp_dir = tempfile::tempdir().unwrap();
        let fonts = temp_dir.path().join("fonts");
        let styles = temp_dir.path().join("styles");
        std::fs::create_dir_all(&fonts).unwrap();
        std::fs::create_dir_all(&styles).unwrap();

        let archive = fixture_archive(&[
            ("font/icons.woff", b"woff".as_slice()),
            ("css/icons.css", b".i{}".as_slice()),
            ("readme.txt", b"docs".as_slice()),
        ]);
        let service = MockService::new().with_session("sid123").with_archive(archive);
        let store = MemoryStore::new();

        let mut settings = settings_in(temp_dir.path());
        settings.fonts = Some(fonts.clone());
        settings.styles = Some(styles.clone());
        settings.exclude = vec!["icons.css".to_owned()];

        let report = run_with(&service, &store, &settings).await.unwrap();

        assert_eq!(std::fs::read(fonts.join("icons.woff")).unwrap(), b"woff");
        assert!(!styles.join("icons.css").exists());
        assert_eq!(report.paths.len(), 2);
        assert_eq!(report.extraction.written, vec![fonts.join("icons.woff")]);
        assert_eq!(report.extraction.skipped, 2);
        assert_eq!(store.read().await.unwrap().unwrap().as_str(), "sid123");
        let lines = report.lines();
        assert!(lines.iter().any(|line| line.contains("session sid123 created")));
        assert!(lines.iter().any(|line| line.contains("extraction complete")));
    }

    #[tokio::test]
    async fn test_full_run_extracts_verbatim() {
        let temp_dir = tempfile::tempdir().unwrap();
        let archive = fixture_archive(&[
            ("font/icons.ttf", b"ttf".as_slice()),
            ("readme.txt", b"docs".as_slice()),
        ]);
        let service = MockService::new().with_session("sid").with_archive(archive);
        let store = MemoryStore::new();

        let mut settings = settings_in(temp_dir.path());
        settings.output = temp_dir.path().join("bundle");

        let report = run_with(&service, &store, &settings).await.unwrap();

        // Verbatim: unmatched extensions are preserved too.
        assert_eq!(std::fs::read(settings.output.join("readme.txt")).unwrap(), b"docs");
        assert_eq!(std::fs::read(settings.output.join("font/icons.ttf")).unwrap(), b"ttf");
        assert!(report.paths.is_empty());
        assert_eq!(report.extraction.written.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_output_directory_fails_before_any_network() {
        let temp_dir = tempfile::tempdir().unwrap();
        let service = MockService::new();
        let store = MemoryStore::new();

        let mut settings = settings_in(temp_dir.path());
        settings.fonts = Some(temp_dir.path().join("missing"));

        let err = run_with(&service, &store, &settings).await.unwrap_err();
        assert!(matches!(&*err, crate::error::ErrorKind::Paths));
        assert_eq!(service.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_force_creates_missing_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let fonts = temp_dir.path().join("assets/fonts");
        let archive = fixture_archive(&[("font/icons.eot", b"eot".as_slice())]);
        let service = MockService::new().with_session("sid").with_archive(archive);
        let store = MemoryStore::new();

        let mut settings = settings_in(temp_dir.path());
        settings.fonts = Some(fonts.clone());
        settings.force = true;

        let report = run_with(&service, &store, &settings).await.unwrap();
        assert_eq!(report.paths, vec![(fonts.clone(), DirStatus::Created)]);
        assert_eq!(std::fs::read(fonts.join("icons.eot")).unwrap(), b"eot");
    }

    #[tokio::test]
    async fn test_unreadable_config_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let service = MockService::new();
        let store = MemoryStore::new();

        let settings = Settings {
            config: temp_dir.path().join("nope.json"),
            output: temp_dir.path().join("bundle"),
            ..Settings::default()
        };

        let err = run_with(&service, &store, &settings).await.unwrap_err();
        assert!(matches!(&*err, crate::error::ErrorKind::ConfigFile { path, .. } if path == &settings.config));
    }

    #[tokio::test]
    async fn test_rejected_configuration_surfaces_as_negotiation_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let service = MockService::new().with_rejection("Invalid config file");
        let store = MemoryStore::new();

        let mut settings = settings_in(temp_dir.path());
        settings.output = temp_dir.path().join("bundle");

        let err = run_with(&service, &store, &settings).await.unwrap_err();
        assert!(matches!(&*err, crate::error::ErrorKind::Negotiation));
        assert!(store.read().await.unwrap().is_none());
    }

    #[test]
    fn test_report_lines_for_reused_session() {
        let report = RunReport {
            paths: vec![(PathBuf::from("fonts"), DirStatus::Verified)],
            session: iconsmith_client::Negotiated::Reused(
                iconsmith_session::SessionId::new("cached").unwrap(),
            ),
            archive_bytes: 42,
            extraction: Default::default(),
        };
        let lines = report.lines();
        assert_eq!(lines[0], "fonts verified");
        assert_eq!(lines[1], "session cached reused from cache");
        assert_eq!(lines[2], "archive fetched (42 bytes)");
    }
}
