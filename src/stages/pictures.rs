//! Article image downloads.
//!
//! Downloads run strictly sequentially, one GET per record. A failed
//! download leaves that record's `picture_filename` unset and moves on;
//! because the filename lives on the record itself, failures can never
//! shift another record's filename into the wrong export row.

use tracing::{info, instrument, warn};

use crate::models::NewsRecord;

/// Derive the image filename from a record title: the first three
/// whitespace-delimited tokens concatenated without separators, plus `.jpg`.
pub fn picture_basename(title: &str) -> String {
    let stem: String = title.split_whitespace().take(3).collect();
    format!("{stem}.jpg")
}

/// Download each record's image into `output_dir`.
///
/// On a success status the body is persisted and `picture_filename` set;
/// any network error, non-success status, or write failure is logged and
/// the loop continues with the next record.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn run(records: &mut [NewsRecord], client: &reqwest::Client, output_dir: &str) {
    let dir = output_dir.trim_end_matches('/');
    let mut downloaded = 0usize;

    for record in records.iter_mut() {
        let filename = picture_basename(&record.title);
        let path = format!("{dir}/{filename}");

        let bytes = match fetch(client, &record.picture_url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url = %record.picture_url, error = %e, "Picture download failed");
                continue;
            }
        };

        if let Err(e) = tokio::fs::write(&path, &bytes).await {
            warn!(%path, error = %e, "Could not persist picture");
            continue;
        }

        record.picture_filename = Some(filename);
        downloaded += 1;
    }

    info!(
        downloaded,
        total = records.len(),
        "Picture downloads complete"
    );
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("status {}", response.status()));
    }
    let body = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(body.to_vec())
}
