//! Configuration State Machine
//!
//! The [`Session`] is the single owner of configuration state for one user.
//! Presentation code never mutates it directly: it builds an [`Event`] and
//! calls [`Session::apply`], then reads back [`Session::configuration`] and
//! [`Session::pricing`].
//!
//! # Transitions
//!
//! ```text
//! Loading ──DataLoaded──▶ Ready
//! Loading ──LoadFailed──▶ Ready (empty catalog)
//!
//! Ready: SelectVehicle | ToggleOption | ClearConfiguration | SetViewMode
//! ```
//!
//! There is no terminal state; a session lives until the program exits.

use crate::catalog::{Catalog, OptionId, Vehicle, VehicleId, VehicleOption};
use crate::error::ConfiguratorError;
use crate::logic::compatibility::{compatible_options, is_compatible};
use crate::logic::pricing::{compute_pricing, PricingResult};
use crate::types::ViewMode;
use thiserror::Error;
use tracing::{debug, warn};

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// All four catalog resources arrived
    DataLoaded(Catalog),
    /// At least one catalog resource failed; carries the reason for logging
    LoadFailed(String),
    /// Pick a base vehicle, discarding any selected options
    SelectVehicle(Vehicle),
    /// Add the option if absent, remove it if present
    ToggleOption(VehicleOption),
    /// Drop the vehicle and all options
    ClearConfiguration,
    /// Switch pricing perspective
    SetViewMode(ViewMode),
}

impl Event {
    fn name(&self) -> &'static str {
        match self {
            Self::DataLoaded(_) => "DataLoaded",
            Self::LoadFailed(_) => "LoadFailed",
            Self::SelectVehicle(_) => "SelectVehicle",
            Self::ToggleOption(_) => "ToggleOption",
            Self::ClearConfiguration => "ClearConfiguration",
            Self::SetViewMode(_) => "SetViewMode",
        }
    }
}

/// Reasons an event is rejected. State is unchanged when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// Options can only be toggled once a vehicle is selected
    #[error("Cannot toggle an option before a vehicle is selected")]
    NoVehicleSelected,

    /// Catalog results arrived after loading already finished
    #[error("Cannot apply {event}: catalog is not loading")]
    NotLoading { event: &'static str },
}

/// The user's current selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    pub selected_vehicle: Option<Vehicle>,
    /// Unique by id, in selection order
    pub selected_options: Vec<VehicleOption>,
    pub view_mode: ViewMode,
}

impl Configuration {
    pub fn is_selected(&self, id: &OptionId) -> bool {
        self.selected_options.iter().any(|o| &o.id == id)
    }

    /// True when there is nothing to reset
    pub fn is_blank(&self) -> bool {
        self.selected_vehicle.is_none() && self.selected_options.is_empty()
    }
}

/// Selection state plus the catalog it was made against.
#[derive(Debug, Clone)]
pub struct Session {
    loading: bool,
    catalog: Catalog,
    configuration: Configuration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session waiting for its catalog
    pub fn new() -> Self {
        Self {
            loading: true,
            catalog: Catalog::default(),
            configuration: Configuration::default(),
        }
    }

    /// Shortcut for a session whose catalog is already in hand
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut session = Self::new();
        session.loading = false;
        session.catalog = catalog;
        session
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.configuration.view_mode
    }

    #[inline]
    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.configuration.selected_vehicle.as_ref()
    }

    #[inline]
    pub fn selected_options(&self) -> &[VehicleOption] {
        &self.configuration.selected_options
    }

    pub fn is_selected(&self, id: &OptionId) -> bool {
        self.configuration.is_selected(id)
    }

    pub fn vehicle_by_id(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.catalog.vehicle(id)
    }

    pub fn option_by_id(&self, id: &OptionId) -> Option<&VehicleOption> {
        self.catalog.option(id)
    }

    /// Pricing of the current selection, recomputed on every call
    pub fn pricing(&self) -> PricingResult {
        compute_pricing(self.selected_vehicle(), self.selected_options())
    }

    /// Catalog options that fit the selected vehicle; empty without one
    pub fn compatible_options(&self) -> Vec<&VehicleOption> {
        match self.selected_vehicle() {
            Some(vehicle) => compatible_options(
                &self.catalog.options,
                vehicle,
                &self.catalog.compatibility_rules,
            ),
            None => Vec::new(),
        }
    }

    /// Whether `option` fits the selected vehicle; false without one
    pub fn fits_selected_vehicle(&self, option: &VehicleOption) -> bool {
        self.selected_vehicle()
            .is_some_and(|v| is_compatible(option, v, &self.catalog.compatibility_rules))
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// - `NoVehicleSelected` for `ToggleOption` without a vehicle
    /// - `NotLoading` for `DataLoaded`/`LoadFailed` after loading finished
    pub fn apply(&mut self, event: Event) -> Result<(), TransitionError> {
        let name = event.name();
        match event {
            Event::DataLoaded(catalog) => {
                self.require_loading(name)?;
                self.catalog = catalog;
                self.loading = false;
            }
            Event::LoadFailed(reason) => {
                self.require_loading(name)?;
                warn!("Catalog load failed, continuing with empty catalog: {}", reason);
                self.catalog = Catalog::default();
                self.loading = false;
            }
            Event::SelectVehicle(vehicle) => {
                debug!("Selected vehicle {}", vehicle.id);
                self.configuration.selected_vehicle = Some(vehicle);
                self.configuration.selected_options.clear();
            }
            Event::ToggleOption(option) => {
                if self.configuration.selected_vehicle.is_none() {
                    return Err(TransitionError::NoVehicleSelected);
                }
                let options = &mut self.configuration.selected_options;
                match options.iter().position(|o| o.id == option.id) {
                    Some(index) => {
                        debug!("Deselected option {}", option.id);
                        options.remove(index);
                    }
                    None => {
                        debug!("Selected option {}", option.id);
                        options.push(option);
                    }
                }
            }
            Event::ClearConfiguration => {
                self.configuration.selected_vehicle = None;
                self.configuration.selected_options.clear();
            }
            Event::SetViewMode(mode) => {
                self.configuration.view_mode = mode;
            }
        }
        debug!("Applied {}", name);
        Ok(())
    }

    /// Build a priced configuration from catalog ids, as the headless
    /// `price` command does. Options are toggled in the order given and a
    /// repeated id is applied once.
    ///
    /// # Errors
    ///
    /// - `UnknownVehicle` / `UnknownOption` for ids missing from the catalog
    /// - `Incompatible` for an option that does not fit the vehicle
    pub fn from_ids(
        catalog: Catalog,
        vehicle_id: &str,
        option_ids: &[String],
        view: ViewMode,
    ) -> crate::error::Result<Self> {
        let mut session = Self::with_catalog(catalog);

        let vehicle = session
            .vehicle_by_id(&VehicleId::from(vehicle_id))
            .cloned()
            .ok_or_else(|| ConfiguratorError::unknown_vehicle(vehicle_id))?;
        session.apply(Event::SelectVehicle(vehicle))?;
        session.apply(Event::SetViewMode(view))?;

        for id in option_ids {
            let option = session
                .option_by_id(&OptionId::from(id.as_str()))
                .cloned()
                .ok_or_else(|| ConfiguratorError::unknown_option(id.as_str()))?;
            if !session.fits_selected_vehicle(&option) {
                return Err(ConfiguratorError::incompatible(id.as_str(), vehicle_id));
            }
            if session.is_selected(&option.id) {
                warn!("Option {} given more than once, ignoring repeat", id);
                continue;
            }
            session.apply(Event::ToggleOption(option))?;
        }

        Ok(session)
    }

    fn require_loading(&self, event: &'static str) -> Result<(), TransitionError> {
        if self.loading {
            Ok(())
        } else {
            Err(TransitionError::NotLoading { event })
        }
    }
}
