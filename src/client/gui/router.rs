/// Pages reachable inside the window. There is only the user list, mounted at `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    UserList,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::UserList => "/",
        }
    }

    pub fn resolve(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::UserList),
            _ => None,
        }
    }
}
