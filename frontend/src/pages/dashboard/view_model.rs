use super::repository::DashboardRepository;
use crate::{
    api::{ApiError, DashboardSummary},
    state::{
        config::{use_api_client, use_app_config},
        view_state::ViewState,
    },
    utils::time::today_in,
};
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub today: NaiveDate,
    pub reload: RwSignal<u32>,
    pub summary_resource: Resource<u32, Result<DashboardSummary, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let today = today_in(use_app_config().time_zone);
        let repository = DashboardRepository::new_with_client(Rc::new(use_api_client()));
        let reload = create_rw_signal(0u32);

        let summary_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.clone();
                async move {
                    let result = repo.fetch_summary().await;
                    if let Err(err) = &result {
                        log::error!("Failed to load dashboard summary: {}", err);
                    }
                    result
                }
            },
        );

        Self {
            today,
            reload,
            summary_resource,
        }
    }

    /// A summary is always shown, even when every count is zero.
    pub fn view_state(&self) -> ViewState<DashboardSummary> {
        ViewState::from_outcome(
            self.summary_resource.loading().get(),
            self.summary_resource.get(),
            |_| false,
        )
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
