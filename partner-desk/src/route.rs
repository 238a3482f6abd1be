//! Router - maps paths to top-level pages

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` - the dashboard shell
    Dashboard,
    /// `/login`
    Login,
    /// `/signup`
    SignUp,
}

impl Route {
    /// Resolve a path to a page; unknown paths land on the login page
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Dashboard,
            "/login" => Route::Login,
            "/signup" => Route::SignUp,
            _ => Route::Login,
        }
    }

    /// Canonical path of the page
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Login => "/login",
            Route::SignUp => "/signup",
        }
    }
}
