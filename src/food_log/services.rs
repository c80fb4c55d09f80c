use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use uuid::Uuid;

use super::dto::{LogFoodRequest, LogFoodResponse};
use crate::state::AppState;

/// Decode the photo, upload it, then insert a new log row or append the new
/// URL to an existing one. Every failure bubbles up to the handler boundary.
pub async fn log_food(st: &AppState, req: LogFoodRequest) -> anyhow::Result<LogFoodResponse> {
    let image = BASE64
        .decode(req.image_base64.as_bytes())
        .context("decode image_base64")?;

    let file_name = format!("{}.jpg", Uuid::new_v4());
    let key = format!("food_logs/{}/{}", req.user_id, file_name);

    st.storage
        .put_object(&key, Bytes::from(image), "image/jpeg")
        .await
        .with_context(|| format!("upload {}", key))?;

    let image_url = st.storage.public_url(&key);

    match req.food_log_id {
        Some(id) => {
            // Not atomic against concurrent appenders on the same id; the
            // last writer wins and earlier appends can be lost.
            let existing = st.store.fetch_image_urls(id).await?;
            let mut urls = match existing {
                Some(v) if !v.is_empty() => v,
                _ => Vec::new(),
            };
            urls.push(image_url.clone());
            st.store.update_image_urls(id, &urls).await?;
        }
        None => {
            st.store
                .insert_log(req.user_id, std::slice::from_ref(&image_url))
                .await?;
        }
    }

    Ok(LogFoodResponse {
        success: true,
        image_url,
        food_log_id: req.food_log_id,
    })
}
