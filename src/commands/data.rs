//! Data page commands: the remote posts feed and its query state

use tauri::State;

use crate::fetch;
use crate::state::AppState;
use crate::store::data::{DataView, LoadStatus};

#[tauri::command]
pub fn get_posts(state: State<'_, AppState>) -> Result<DataView, String> {
    let data = state.data.lock().map_err(|e| e.to_string())?;
    Ok(data.view())
}

/// Loads the posts collection from the placeholder API. Triggering this
/// while a load is already in flight is a no-op; the store itself does no
/// de-duplication, so this command is where that rule lives.
#[tauri::command]
pub async fn fetch_posts(state: State<'_, AppState>) -> Result<DataView, String> {
    {
        let mut data = state.data.lock().map_err(|e| e.to_string())?;
        if data.status == LoadStatus::Loading {
            log::debug!("fetch_posts: load already in flight, ignoring trigger");
            return Ok(data.view());
        }
        data.begin_load();
    }

    // Lock released while the request is on the wire; search and paging
    // keep working against the current collection in the meantime.
    let result = fetch::fetch_posts(&state.http).await;

    let mut data = state.data.lock().map_err(|e| e.to_string())?;
    match result {
        Ok(posts) => {
            log::info!("fetched {} posts", posts.len());
            data.load_succeeded(posts);
        }
        Err(e) => {
            log::warn!("posts fetch failed: {}", e);
            data.load_failed(fetch::FETCH_FAILED_MESSAGE.to_string());
        }
    }
    Ok(data.view())
}

#[tauri::command]
pub fn search_posts(state: State<'_, AppState>, query: String) -> Result<DataView, String> {
    let mut data = state.data.lock().map_err(|e| e.to_string())?;
    data.set_search_query(query);
    Ok(data.view())
}

#[tauri::command]
pub fn set_posts_page(state: State<'_, AppState>, page: usize) -> Result<DataView, String> {
    let mut data = state.data.lock().map_err(|e| e.to_string())?;
    data.set_page(page);
    Ok(data.view())
}
