//! Test helpers shared by the client integration tests

#![allow(dead_code)]

use pocasie_client::{CityApi, CityBrowser, Screen};
use shared::{CityForm, CityId, Language, View};

/// Screen that records everything it is asked to show
#[derive(Debug, Default)]
pub struct MemoryScreen {
    pub views: Vec<View>,
    pub alerts: Vec<String>,
    pub form: CityForm,
}

impl MemoryScreen {
    pub fn last_view(&self) -> Option<&View> {
        self.views.last()
    }

    /// Card ids of the most recent render
    pub fn listed_ids(&self) -> Vec<CityId> {
        self.last_view().map(View::card_ids).unwrap_or_default()
    }
}

impl Screen for MemoryScreen {
    fn render(&mut self, view: View) {
        self.views.push(view);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn form(&self) -> &CityForm {
        &self.form
    }

    fn clear_form(&mut self) {
        self.form.clear();
    }
}

pub fn browser(api_url: &str) -> CityBrowser<MemoryScreen> {
    CityBrowser::new(CityApi::new(api_url), MemoryScreen::default(), Language::Slovak)
}

pub fn browser_with_form(api_url: &str, form: CityForm) -> CityBrowser<MemoryScreen> {
    let mut browser = browser(api_url);
    browser.screen_mut().form = form;
    browser
}
