//! Application State
//!
//! Central state container for tdisco. All state lives here and every
//! change goes through a method, so the fetch lifecycle
//! (Idle -> Loading -> Success | Error -> Idle) and the filter projection
//! stay consistent with each other.

use crate::api::client::{format_services_error, DiscoveryClient, BACKEND_UNAVAILABLE_MESSAGE};
use crate::api::error::ApiError;
use crate::resource::{
    filter_indices, unique_service_types, FilterState, RegionsResponse, Resource, ServiceSummary,
    ServicesResponse, ALL,
};
use chrono::NaiveDateTime;
use tokio::sync::mpsc::UnboundedSender;

/// Application modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,        // Viewing table
    Search,        // Editing the search term
    RegionSelect,  // Region selector popup
    ServiceSelect, // Service type selector popup
    Describe,      // Viewing JSON details of selected resource
    Help,          // ? help popup
}

/// Transient status of the most recent services fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<String>,
}

/// Completion message for a services fetch running on a background task
#[derive(Debug)]
pub struct ServicesFetched {
    pub seq: u64,
    pub result: Result<ServicesResponse, ApiError>,
}

/// Human-readable local timestamp, e.g. `10/14/2026, 3:04:05 PM`
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Main application state
pub struct App {
    pub client: DiscoveryClient,

    // Fetched data
    pub resources: Vec<Resource>,
    pub summary: ServiceSummary,
    pub regions: Vec<String>,
    pub regions_scanned: Option<usize>,

    // Derived from `resources`
    pub service_types: Vec<String>,

    // Filter state and its projection (indices into `resources`)
    pub filter: FilterState,
    pub filtered: Vec<usize>,

    pub status: FetchStatus,

    // Navigation state
    pub mode: Mode,
    pub selected: usize,
    pub selector_selected: usize,
    pub describe_scroll: usize,

    // Sequence number of the most recently started services fetch
    services_seq: u64,
}

impl App {
    pub fn new(client: DiscoveryClient) -> Self {
        Self {
            client,
            resources: Vec::new(),
            summary: ServiceSummary::new(),
            regions: Vec::new(),
            regions_scanned: None,
            service_types: Vec::new(),
            filter: FilterState::default(),
            filtered: Vec::new(),
            status: FetchStatus::default(),
            mode: Mode::Normal,
            selected: 0,
            selector_selected: 0,
            describe_scroll: 0,
            services_seq: 0,
        }
    }

    // =========================================================================
    // Data Loading
    // =========================================================================

    /// Probe the backend; on failure show the fixed unavailable message
    pub async fn check_health(&mut self) -> bool {
        let result = self.client.check_health().await;
        self.apply_health(result)
    }

    pub fn apply_health(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Health check failed: {}", e);
                self.status.error = Some(BACKEND_UNAVAILABLE_MESSAGE.to_string());
                false
            },
        }
    }

    pub async fn fetch_regions(&mut self) {
        let result = self.client.list_regions().await;
        self.apply_regions(result);
    }

    /// Region failures are logged only; the previous list stays in place
    pub fn apply_regions(&mut self, result: Result<RegionsResponse, ApiError>) {
        match result {
            Ok(response) => {
                self.regions = response.regions.unwrap_or_default();
                tracing::info!("Loaded {} regions", self.regions.len());
            },
            Err(e) => {
                tracing::warn!("Error fetching regions: {}", e);
            },
        }
    }

    /// Fetch services inline, awaiting the response
    pub async fn fetch_services(&mut self) {
        let seq = self.begin_services_fetch();
        let result = self.client.list_services().await;
        self.apply_services(ServicesFetched { seq, result });
    }

    /// Enter the loading state and return the sequence number for the new fetch
    pub fn begin_services_fetch(&mut self) -> u64 {
        self.services_seq += 1;
        self.status.loading = true;
        self.status.error = None;
        self.services_seq
    }

    /// Apply a services result. Results of superseded fetches are dropped.
    pub fn apply_services(&mut self, fetched: ServicesFetched) {
        if fetched.seq != self.services_seq {
            tracing::debug!(
                "Dropping stale services result #{} (latest #{})",
                fetched.seq,
                self.services_seq
            );
            return;
        }

        match fetched.result {
            Ok(response) => {
                self.resources = response.resources.unwrap_or_default();
                self.summary = response.service_summary.unwrap_or_default();
                self.regions_scanned = response.regions_scanned;
                self.status.last_updated =
                    Some(format_timestamp(&chrono::Local::now().naive_local()));
                self.service_types = unique_service_types(&self.resources);
                tracing::info!(
                    "Loaded {} resources across {} service types",
                    self.resources.len(),
                    self.service_types.len()
                );
                self.apply_filter();
            },
            Err(e) => {
                tracing::error!("Error fetching services (status {:?}): {}", e.status(), e);
                self.status.error = Some(format_services_error(&e));
            },
        }

        self.status.loading = false;
    }

    /// Startup sequence: health, then regions, then services, one after another.
    /// Nothing beyond the health probe runs when the backend is unhealthy.
    pub async fn startup(&mut self) -> bool {
        if !self.check_health().await {
            return false;
        }
        self.fetch_regions().await;
        self.fetch_services().await;
        true
    }

    /// Start a manual refresh on a background task. Ignored while loading.
    pub fn spawn_refresh(&mut self, tx: UnboundedSender<ServicesFetched>) -> bool {
        if self.status.loading {
            return false;
        }

        let seq = self.begin_services_fetch();
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = client.list_services().await;
            if tx.send(ServicesFetched { seq, result }).is_err() {
                tracing::debug!("Services result #{} arrived after shutdown", seq);
            }
        });
        true
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Recompute the filtered projection from scratch
    pub fn apply_filter(&mut self) {
        self.filtered = filter_indices(&self.resources, &self.filter);

        if self.selected >= self.filtered.len() {
            self.selected = self.filtered.len().saturating_sub(1);
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.search_term.push(c);
        self.apply_filter();
    }

    pub fn pop_search_char(&mut self) {
        self.filter.search_term.pop();
        self.apply_filter();
    }

    pub fn clear_search(&mut self) {
        self.filter.search_term.clear();
        self.apply_filter();
    }

    pub fn select_region(&mut self, region: &str) {
        self.filter.selected_region = region.to_string();
        self.apply_filter();
    }

    pub fn select_service(&mut self, service: &str) {
        self.filter.selected_service = service.to_string();
        self.apply_filter();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.apply_filter();
    }

    pub fn filtered_resources(&self) -> Vec<&Resource> {
        self.filtered.iter().map(|&idx| &self.resources[idx]).collect()
    }

    pub fn selected_resource(&self) -> Option<&Resource> {
        self.filtered
            .get(self.selected)
            .and_then(|&idx| self.resources.get(idx))
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    /// Region selector entries: the sentinel first, then the fetched regions
    pub fn region_options(&self) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(self.regions.iter().cloned())
            .collect()
    }

    /// Service selector entries: the sentinel first, then the derived types
    pub fn service_options(&self) -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(self.service_types.iter().cloned())
            .collect()
    }

    fn selector_options(&self) -> Vec<String> {
        match self.mode {
            Mode::RegionSelect => self.region_options(),
            Mode::ServiceSelect => self.service_options(),
            _ => Vec::new(),
        }
    }

    pub fn enter_region_select(&mut self) {
        self.selector_selected = self
            .region_options()
            .iter()
            .position(|r| *r == self.filter.selected_region)
            .unwrap_or(0);
        self.mode = Mode::RegionSelect;
    }

    pub fn enter_service_select(&mut self) {
        self.selector_selected = self
            .service_options()
            .iter()
            .position(|s| *s == self.filter.selected_service)
            .unwrap_or(0);
        self.mode = Mode::ServiceSelect;
    }

    /// Apply the highlighted selector entry and return to the table
    pub fn apply_selector(&mut self) {
        let options = self.selector_options();
        if let Some(choice) = options.get(self.selector_selected) {
            match self.mode {
                Mode::RegionSelect => self.select_region(choice),
                Mode::ServiceSelect => self.select_service(choice),
                _ => {},
            }
        }
        self.exit_mode();
    }

    // =========================================================================
    // Modes
    // =========================================================================

    pub fn enter_search_mode(&mut self) {
        self.mode = Mode::Search;
    }

    pub fn enter_help_mode(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn enter_describe_mode(&mut self) {
        if self.selected_resource().is_some() {
            self.describe_scroll = 0;
            self.mode = Mode::Describe;
        }
    }

    pub fn exit_mode(&mut self) {
        self.mode = Mode::Normal;
        self.describe_scroll = 0;
    }

    pub fn selected_resource_json(&self) -> Option<String> {
        self.selected_resource()
            .map(|r| serde_json::to_string_pretty(r).unwrap_or_default())
    }

    /// Last line the detail view may scroll to
    fn describe_max_scroll(&self) -> usize {
        self.selected_resource_json()
            .map(|json| json.lines().count().saturating_sub(1))
            .unwrap_or(0)
    }

    pub fn scroll_describe_down(&mut self, lines: usize) {
        self.describe_scroll = self
            .describe_scroll
            .saturating_add(lines)
            .min(self.describe_max_scroll());
    }

    pub fn scroll_describe_up(&mut self, lines: usize) {
        self.describe_scroll = self.describe_scroll.saturating_sub(lines);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn list_len(&self) -> usize {
        match self.mode {
            Mode::RegionSelect => self.regions.len() + 1,
            Mode::ServiceSelect => self.service_types.len() + 1,
            _ => self.filtered.len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            Mode::RegionSelect | Mode::ServiceSelect => &mut self.selector_selected,
            _ => &mut self.selected,
        }
    }

    pub fn next(&mut self) {
        let len = self.list_len();
        if len > 0 {
            let cursor = self.cursor_mut();
            *cursor = (*cursor + 1).min(len - 1);
        }
    }

    pub fn previous(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn go_to_top(&mut self) {
        *self.cursor_mut() = 0;
    }

    pub fn go_to_bottom(&mut self) {
        let len = self.list_len();
        *self.cursor_mut() = len.saturating_sub(1);
    }

    pub fn page_down(&mut self, page_size: usize) {
        let len = self.list_len();
        if len > 0 {
            let cursor = self.cursor_mut();
            *cursor = (*cursor + page_size).min(len - 1);
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(page_size);
    }
}
