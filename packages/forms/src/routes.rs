use serde::Serialize;

/// Where the app navigates after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Home,
    InitialSurvey { user_id: String, is_coach: bool },
    CoachSurvey { user_id: String },
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::InitialSurvey { .. } => "/initial-survey",
            Route::CoachSurvey { .. } => "/coach-survey",
        }
    }
}

/// A submission the backend accepted, with the route to navigate to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Redirect {
    pub route: Route,
    pub body: serde_json::Value,
}
