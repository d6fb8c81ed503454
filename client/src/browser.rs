//! The city browser: listing, detail view and name-keyed mutations
//!
//! Every operation is one request/render cycle. Read paths (list, detail)
//! only log their failures. Write paths (create, update, delete) raise an
//! alert on the screen and abort without side effects. After a successful
//! mutation the list is reloaded and the form cleared.

use shared::{
    render_city_detail, render_city_list, resolve_by_name, CityId, CitySummary, Language,
    NameLookup,
};

use crate::api::CityApi;
use crate::error::{ClientError, ClientResult, Operation};
use crate::screen::Screen;

pub struct CityBrowser<S: Screen> {
    api: CityApi,
    screen: S,
    language: Language,
}

impl<S: Screen> CityBrowser<S> {
    pub fn new(api: CityApi, screen: S, language: Language) -> Self {
        Self {
            api,
            screen,
            language,
        }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Fetch all cities and render one card per city.
    ///
    /// Failures are logged and leave the screen untouched.
    pub async fn load_cities(&mut self) -> ClientResult<()> {
        match self.api.list_cities().await {
            Ok(cities) => {
                self.screen.render(render_city_list(&cities));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load cities: {}", e);
                Err(e)
            }
        }
    }

    /// Fetch one city and render its detail with the matching animation.
    ///
    /// Failures are logged and leave the screen untouched.
    pub async fn show_city(&mut self, id: CityId) -> ClientResult<()> {
        match self.api.get_city(id).await {
            Ok(city) => {
                self.screen.render(render_city_detail(&city));
                Ok(())
            }
            Err(e) => {
                tracing::error!(city_id = id, "Failed to load city: {}", e);
                Err(e)
            }
        }
    }

    /// Leave the detail view for the listing
    pub async fn back_to_cities(&mut self) -> ClientResult<()> {
        self.screen.render(render_city_list(&[]));
        self.load_cities().await
    }

    /// Create a city from the form
    pub async fn add_city(&mut self) -> ClientResult<()> {
        let result = self.try_add_city().await;
        self.finish(Operation::Create, result).await
    }

    /// Replace the readings of the city named in the form
    pub async fn edit_city(&mut self) -> ClientResult<()> {
        let result = self.try_edit_city().await;
        self.finish(Operation::Update, result).await
    }

    /// Delete the city named in the form
    pub async fn delete_city(&mut self) -> ClientResult<()> {
        let result = self.try_delete_city().await;
        self.finish(Operation::Delete, result).await
    }

    /// Reset all input fields
    pub fn clear_inputs(&mut self) {
        self.screen.clear_form();
    }

    async fn try_add_city(&mut self) -> ClientResult<()> {
        let city = self.screen.form().to_new_city()?;
        self.api.create_city(&city).await
    }

    async fn try_edit_city(&mut self) -> ClientResult<()> {
        let target = self.resolve_target().await?;
        let readings = self.screen.form().to_readings()?;
        self.api.update_city(target.id, &readings).await
    }

    async fn try_delete_city(&mut self) -> ClientResult<()> {
        let target = self.resolve_target().await?;
        self.api.delete_city(target.id).await
    }

    /// Look the form's name up in a freshly fetched collection
    async fn resolve_target(&self) -> ClientResult<CitySummary> {
        let name = self.screen.form().name.trim().to_string();
        let cities = self.api.list_cities().await?;

        match resolve_by_name(&cities, &name) {
            NameLookup::NotFound => Err(ClientError::CityNotFound(name)),
            NameLookup::Unique(city) => Ok(city.clone()),
            NameLookup::Ambiguous { first, matches } => {
                tracing::warn!(
                    nazov = %name,
                    matches,
                    city_id = first.id,
                    "Name matches several cities, using the first"
                );
                Ok(first.clone())
            }
        }
    }

    async fn finish(
        &mut self,
        operation: Operation,
        result: ClientResult<()>,
    ) -> ClientResult<()> {
        match result {
            Ok(()) => {
                tracing::info!("City {} succeeded", operation);
                // a failed reload is already logged
                self.load_cities().await.ok();
                self.clear_inputs();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("City {} failed: {}", operation, e);
                let message = operation.alert_message(&e, self.language);
                self.screen.alert(message);
                Err(e)
            }
        }
    }
}
