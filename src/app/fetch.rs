//! Sequential fetch-and-write loop
//!
//! This module implements the per-date download operation and the inclusive
//! range driver built on top of it. One request is in flight at a time, and
//! each asset is written through the atomic temp file + rename pattern so an
//! interrupted run never leaves a truncated file at the destination path.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::app::client::FrontPageClient;
use crate::app::date::IssueDate;
use crate::app::models::{resolve_urls_from, DownloadOptions, FetchStats};
use crate::constants::files;
use crate::errors::{DownloadError, DownloadResult};

/// Downloads the given URLs for one date into the dated output folder
///
/// Creates `<output_dir>/YYYY/MM/DD/` and any missing ancestors first. The
/// file name for each URL is its final path segment. With `skip_existing`
/// set, files already present are left untouched and no request is made for
/// them. A non-2xx response means the archive has no such asset: it is
/// logged and counted, never raised as an error.
///
/// # Errors
///
/// Returns `DownloadError` on transport failures and on any filesystem
/// failure (directory creation, write, rename)
pub async fn fetch_and_store(
    client: &FrontPageClient,
    date: IssueDate,
    urls: &[String],
    options: &DownloadOptions,
) -> DownloadResult<FetchStats> {
    let folder = options.output_dir.join(date.slash_path());
    tokio::fs::create_dir_all(&folder).await?;

    let mut stats = FetchStats::default();
    for url in urls {
        let file_name = url.rsplit('/').next().unwrap_or(url.as_str());
        let destination = folder.join(file_name);

        if options.skip_existing && destination.is_file() {
            tracing::info!("Already downloaded {}", destination.display());
            stats.skipped += 1;
            continue;
        }

        let response = client.get(url).await?;
        if !response.status().is_success() {
            tracing::warn!(
                "No asset at {} (HTTP {})",
                url,
                response.status().as_u16()
            );
            stats.unavailable += 1;
            continue;
        }

        let bytes = response.bytes().await?;
        write_atomic(&destination, &bytes).await?;
        tracing::info!("Downloaded {} for {}", file_name, date);
        stats.downloaded += 1;
    }

    Ok(stats)
}

/// Writes `bytes` to `destination` through a temp file and atomic rename
async fn write_atomic(destination: &Path, bytes: &[u8]) -> DownloadResult<()> {
    let temp_path = destination.with_extension(format!(
        "{}{}",
        destination
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or(""),
        files::TEMP_FILE_SUFFIX
    ));

    let mut file = File::create(&temp_path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;

    tokio::fs::rename(&temp_path, destination)
        .await
        .map_err(|_e| DownloadError::AtomicOperationFailed {
            temp_path: temp_path.clone(),
            final_path: destination.to_path_buf(),
        })?;

    Ok(())
}

/// Resolves and downloads every applicable asset for a single date
///
/// URL resolution runs against the client's base URL, so the same code path
/// serves production and tests.
pub async fn fetch_date(
    client: &FrontPageClient,
    date: IssueDate,
    options: &DownloadOptions,
) -> DownloadResult<FetchStats> {
    let urls = resolve_urls_from(client.base_url().as_str(), date);
    fetch_and_store(client, date, &urls, options).await
}

/// Downloads every date from `start` to `end` inclusive, one day at a time
///
/// Emits one notice per processed date. An empty range (`start` after
/// `end`) performs zero iterations and is not an error.
pub async fn fetch_range(
    client: &FrontPageClient,
    start: IssueDate,
    end: IssueDate,
    options: &DownloadOptions,
) -> DownloadResult<FetchStats> {
    let mut stats = FetchStats::default();
    let mut date = start;
    while date <= end {
        tracing::info!("Processing {}", date);
        stats.merge(fetch_date(client, date, options).await?);
        date = match date.succ() {
            Some(next) => next,
            None => break,
        };
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn date(token: &str) -> IssueDate {
        IssueDate::parse(token).unwrap()
    }

    fn options_for(root: &Path, skip_existing: bool) -> DownloadOptions {
        DownloadOptions {
            output_dir: root.to_path_buf(),
            skip_existing,
        }
    }

    async fn client_for(server: &MockServer) -> FrontPageClient {
        FrontPageClient::with_base_url(&server.uri()).unwrap()
    }

    async fn mount_asset(server: &MockServer, date_path: &str, file_name: &str, body: &[u8]) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/images/{}/nytfrontpage/{}",
                date_path, file_name
            )))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
            .mount(server)
            .await;
    }

    fn assert_no_temp_files(folder: &Path) {
        for entry in std::fs::read_dir(folder).unwrap() {
            let name = entry.unwrap().file_name();
            assert!(
                !name.to_string_lossy().ends_with(files::TEMP_FILE_SUFFIX),
                "temp file left behind: {:?}",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_fetch_date_writes_all_assets() {
        let server = MockServer::start().await;
        mount_asset(&server, "2013/01/01", "scannat.pdf", b"national").await;
        mount_asset(&server, "2013/01/01", "scan.pdf", b"international").await;
        mount_asset(&server, "2013/01/01", "scan.jpg", b"jpeg").await;

        let out = tempdir().unwrap();
        let client = client_for(&server).await;
        let stats = fetch_date(&client, date("20130101"), &options_for(out.path(), false))
            .await
            .unwrap();

        let folder = out.path().join("2013/01/01");
        assert_eq!(std::fs::read(folder.join("scannat.pdf")).unwrap(), b"national");
        assert_eq!(
            std::fs::read(folder.join("scan.pdf")).unwrap(),
            b"international"
        );
        assert_eq!(std::fs::read(folder.join("scan.jpg")).unwrap(), b"jpeg");
        assert_eq!(stats.downloaded, 3);
        assert_eq!(stats.total(), 3);
        assert_no_temp_files(&folder);
    }

    #[tokio::test]
    async fn test_skip_existing_issues_no_request() {
        let server = MockServer::start().await;
        mount_asset(&server, "2013/01/01", "scannat.pdf", b"national").await;
        mount_asset(&server, "2013/01/01", "scan.pdf", b"international").await;

        // The JPEG is already on disk; its mock must never be hit
        Mock::given(method("GET"))
            .and(path("/images/2013/01/01/nytfrontpage/scan.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fresh".to_vec()))
            .expect(0)
            .mount(&server)
            .await;

        let out = tempdir().unwrap();
        let folder = out.path().join("2013/01/01");
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("scan.jpg"), b"cached").unwrap();

        let client = client_for(&server).await;
        let stats = fetch_date(&client, date("20130101"), &options_for(out.path(), true))
            .await
            .unwrap();

        assert_eq!(std::fs::read(folder.join("scan.jpg")).unwrap(), b"cached");
        assert_eq!(std::fs::read(folder.join("scannat.pdf")).unwrap(), b"national");
        assert_eq!(stats.downloaded, 2);
        assert_eq!(stats.skipped, 1);
    }

    #[tokio::test]
    async fn test_existing_file_is_overwritten_without_skip_flag() {
        let server = MockServer::start().await;
        mount_asset(&server, "2013/01/01", "scannat.pdf", b"fresh").await;
        mount_asset(&server, "2013/01/01", "scan.pdf", b"fresh").await;
        mount_asset(&server, "2013/01/01", "scan.jpg", b"fresh").await;

        let out = tempdir().unwrap();
        let folder = out.path().join("2013/01/01");
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("scan.jpg"), b"stale").unwrap();

        let client = client_for(&server).await;
        let stats = fetch_date(&client, date("20130101"), &options_for(out.path(), false))
            .await
            .unwrap();

        assert_eq!(std::fs::read(folder.join("scan.jpg")).unwrap(), b"fresh");
        assert_eq!(stats.downloaded, 3);
        assert_eq!(stats.skipped, 0);
    }

    #[tokio::test]
    async fn test_unavailable_asset_is_counted_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/2013/01/01/nytfrontpage/scannat.pdf"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        mount_asset(&server, "2013/01/01", "scan.pdf", b"international").await;
        mount_asset(&server, "2013/01/01", "scan.jpg", b"jpeg").await;

        let out = tempdir().unwrap();
        let client = client_for(&server).await;
        let stats = fetch_date(&client, date("20130101"), &options_for(out.path(), false))
            .await
            .unwrap();

        let folder = out.path().join("2013/01/01");
        assert!(!folder.join("scannat.pdf").exists());
        assert!(folder.join("scan.pdf").exists());
        assert_eq!(stats.downloaded, 2);
        assert_eq!(stats.unavailable, 1);
    }

    #[tokio::test]
    async fn test_fetch_and_store_uses_last_path_segment_as_file_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/some/deep/path/custom.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"payload".to_vec()))
            .mount(&server)
            .await;

        let out = tempdir().unwrap();
        let client = client_for(&server).await;
        let urls = vec![format!("{}/some/deep/path/custom.bin", server.uri())];
        let stats = fetch_and_store(
            &client,
            date("20130101"),
            &urls,
            &options_for(out.path(), false),
        )
        .await
        .unwrap();

        let destination = out.path().join("2013/01/01/custom.bin");
        assert_eq!(std::fs::read(destination).unwrap(), b"payload");
        assert_eq!(stats.downloaded, 1);
    }

    #[tokio::test]
    async fn test_empty_range_performs_no_work() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let out = tempdir().unwrap();
        let root = out.path().join("range-out");
        let client = client_for(&server).await;
        let stats = fetch_range(
            &client,
            date("20130102"),
            date("20130101"),
            &options_for(&root, false),
        )
        .await
        .unwrap();

        assert_eq!(stats, FetchStats::default());
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_range_respects_availability_epochs() {
        // 2012-07-05 has only the JPEG; 2012-07-06 has all three assets
        let server = MockServer::start().await;
        mount_asset(&server, "2012/07/05", "scan.jpg", b"jpeg").await;
        mount_asset(&server, "2012/07/06", "scannat.pdf", b"national").await;
        mount_asset(&server, "2012/07/06", "scan.pdf", b"international").await;
        mount_asset(&server, "2012/07/06", "scan.jpg", b"jpeg").await;

        let out = tempdir().unwrap();
        let client = client_for(&server).await;
        let stats = fetch_range(
            &client,
            date("20120705"),
            date("20120706"),
            &options_for(out.path(), false),
        )
        .await
        .unwrap();

        let first_day: Vec<_> = std::fs::read_dir(out.path().join("2012/07/05"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(first_day, vec!["scan.jpg"]);

        let second_day = std::fs::read_dir(out.path().join("2012/07/06")).unwrap().count();
        assert_eq!(second_day, 3);
        assert_eq!(stats.downloaded, 4);
    }

    #[tokio::test]
    async fn test_single_day_range_equals_single_fetch() {
        let server = MockServer::start().await;
        mount_asset(&server, "2013/01/01", "scannat.pdf", b"a").await;
        mount_asset(&server, "2013/01/01", "scan.pdf", b"b").await;
        mount_asset(&server, "2013/01/01", "scan.jpg", b"c").await;

        let out = tempdir().unwrap();
        let client = client_for(&server).await;
        let stats = fetch_range(
            &client,
            date("20130101"),
            date("20130101"),
            &options_for(out.path(), false),
        )
        .await
        .unwrap();

        assert_eq!(stats.downloaded, 3);
        assert!(out.path().join("2013/01/01/scan.jpg").exists());
    }

    #[test]
    fn test_temp_file_path_keeps_original_extension() {
        // scan.jpg must stage as scan.jpg.tmp next to the destination
        let destination = Path::new("/tmp/out/2013/01/01/scan.jpg");
        let temp_path = destination.with_extension(format!(
            "{}{}",
            destination
                .extension()
                .and_then(|s| s.to_str())
                .unwrap_or(""),
            files::TEMP_FILE_SUFFIX
        ));

        assert!(temp_path.to_string_lossy().ends_with("scan.jpg.tmp"));
    }
}
