//! Auth stub commands. The session is an in-memory flag with no server
//! check; logging out simply clears it.

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub name: String,
}

#[tauri::command]
pub fn login(state: State<'_, AppState>, input: LoginInput) -> Result<Session, String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    *session = Session::signed_in(input.email, input.name);
    log::info!("user signed in");
    Ok(session.clone())
}

#[tauri::command]
pub fn logout(state: State<'_, AppState>) -> Result<Session, String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    session.clear();
    Ok(session.clone())
}

#[tauri::command]
pub fn get_session(state: State<'_, AppState>) -> Result<Session, String> {
    let session = state.session.lock().map_err(|e| e.to_string())?;
    Ok(session.clone())
}
