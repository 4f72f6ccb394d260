//! Client-side routes and the navigation sidebar.

use std::path::PathBuf;

/// One page of the course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    PointLimits,
    EpsilonDelta,
    Properties,
    Indeterminate,
    Infinitesimals,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::PointLimits,
        Route::EpsilonDelta,
        Route::Properties,
        Route::Indeterminate,
        Route::Infinitesimals,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::PointLimits => "/leccion1",
            Route::EpsilonDelta => "/leccion2",
            Route::Properties => "/leccion3",
            Route::Indeterminate => "/leccion4",
            Route::Infinitesimals => "/leccion5",
        }
    }

    /// Link text in the sidebar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "🏠 Inicio",
            Route::PointLimits => "1. Límites en un Punto",
            Route::EpsilonDelta => "2. Concepto de Límite (ε-δ)",
            Route::Properties => "3. Propiedades de los Límites",
            Route::Indeterminate => "4. Indeterminaciones",
            Route::Infinitesimals => "5. Infinitésimos",
        }
    }

    /// Exact path match; one trailing slash is tolerated.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Route::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Where the static page for this route is written, relative to the site root.
    pub fn output_file(self) -> PathBuf {
        match self {
            Route::Home => PathBuf::from("index.html"),
            other => PathBuf::from(other.path().trim_start_matches('/')).join("index.html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_paths() {
        assert_eq!(Route::resolve("/"), Some(Route::Home));
        assert_eq!(Route::resolve("/leccion2"), Some(Route::EpsilonDelta));
        assert_eq!(Route::resolve("/leccion5/"), Some(Route::Infinitesimals));
        assert_eq!(Route::resolve("/leccion6"), None);
        assert_eq!(Route::resolve("/leccion1//"), None);
        assert_eq!(Route::resolve(""), None);
    }

    #[test]
    fn every_route_round_trips_through_its_path() {
        for r in Route::ALL {
            assert_eq!(Route::resolve(r.path()), Some(r));
        }
    }

    #[test]
    fn output_files_nest_lessons() {
        assert_eq!(Route::Home.output_file(), PathBuf::from("index.html"));
        assert_eq!(
            Route::Properties.output_file(),
            PathBuf::from("leccion3").join("index.html")
        );
    }
}
