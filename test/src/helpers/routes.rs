use dcs_shared::{CountRecord, CountTable, InteractMode, PageName, Route, RoutePushed, TriggerId};

pub fn full_client(page_name: &str) -> Route {
    Route::FullClient {
        page_name: PageName::from(page_name),
    }
}

pub fn full_host(pathname: &str) -> Route {
    Route::FullHost {
        pathname: pathname.to_owned(),
    }
}

pub fn interactive(page_name: &str, interact_mode: &str, trigger_id: Option<&str>) -> Route {
    Route::SplitInteractive {
        page_name: PageName::from(page_name),
        interact_mode: InteractMode::from(interact_mode),
        trigger_id: trigger_id.map(TriggerId::from),
    }
}

pub fn read_only(page_name: &str) -> Route {
    Route::SplitReadOnly {
        page_name: PageName::from(page_name),
    }
}

/// Host push with no client context.
pub fn pushed(route: Route, counts: Vec<CountRecord>) -> RoutePushed {
    RoutePushed::new(route, CountTable::from(counts))
}
