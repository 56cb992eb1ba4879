//! Filter propagation chain
//!
//! The hub owns the three pieces of cross-filter state (active regions,
//! reference year, derived filtered view) and recomputes the view when
//! either input changes. Components feed it events instead of calling
//! into each other; the returned view is what a renderer consumes.

use std::collections::BTreeSet;

use bitvec::prelude::*;

use crate::cluster::{Cluster, PointList, RadiusScale, cluster_points};
use crate::filter::date::open_at;
use crate::filter::region::RegionSelection;
use crate::museum::Museum;

/// A filter input change
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    /// A region was clicked on the map
    RegionToggled(String),
    /// The time slider moved (or the play timer ticked)
    YearChanged(f64),
}

/// Derived, read-only view of the dataset under the current filters
///
/// Rebuilt from scratch on every filter change; nothing here survives a
/// recompute.
#[derive(Debug, Clone)]
pub struct FilteredView {
    /// Indices into the full dataset of museums passing both filters
    pub indices: Vec<usize>,
    /// Clusters over the filtered points, in creation order
    pub clusters: Vec<Cluster>,
    /// Radius scale fitted to the current cluster counts
    pub scale: RadiusScale,
}

/// Coordinates region toggling, slider movement, and the derived view
///
/// Region filtering is the outer filter and date filtering the inner one:
/// a region toggle rebuilds the region mask from the full dataset, while a
/// year change reuses the cached mask and only re-runs the date predicate.
/// Both paths finish with a fresh clustering pass and scale fit.
///
/// Single-threaded by design; each event runs to completion before the
/// next is applied, matching the serial event handling of the UI.
#[derive(Debug)]
pub struct FilterHub {
    museums: Vec<Museum>,
    regions: RegionSelection,
    reference_year: f64,
    cluster_radius_km: f64,
    max_point_radius: f64,
    /// Cached outer filter: bit i set iff museum i's region is active
    region_mask: BitVec,
    view: FilteredView,
}

impl FilterHub {
    /// Builds a hub over a dataset with every region initially active
    ///
    /// The region universe is the set of distinct `admin_area_1` values in
    /// the data.
    pub fn new(
        museums: Vec<Museum>,
        reference_year: f64,
        cluster_radius_km: f64,
        max_point_radius: f64,
    ) -> Self {
        let names: BTreeSet<&str> = museums.iter().map(|m| m.admin_area_1.as_str()).collect();
        let regions = RegionSelection::all_active(names);

        let mut hub = FilterHub {
            region_mask: bitvec![1; museums.len()],
            museums,
            regions,
            reference_year,
            cluster_radius_km,
            max_point_radius,
            view: FilteredView {
                indices: Vec::new(),
                clusters: Vec::new(),
                scale: RadiusScale::fit(&[], max_point_radius),
            },
        };
        hub.refresh_view();
        hub
    }

    /// Applies one filter event and returns the recomputed view
    pub fn apply(&mut self, event: FilterEvent) -> &FilteredView {
        match event {
            FilterEvent::RegionToggled(name) => {
                self.regions.toggle(&name);
                self.rebuild_region_mask();
            }
            FilterEvent::YearChanged(year) => {
                // Region mask stays cached; only the inner filter re-runs
                self.reference_year = year;
            }
        }
        self.refresh_view();
        &self.view
    }

    fn rebuild_region_mask(&mut self) {
        for (i, museum) in self.museums.iter().enumerate() {
            self.region_mask
                .set(i, self.regions.is_active(&museum.admin_area_1));
        }
    }

    fn refresh_view(&mut self) {
        let indices: Vec<usize> = self
            .region_mask
            .iter_ones()
            .filter(|&i| open_at(&self.museums[i], self.reference_year))
            .collect();

        let points: PointList = indices.iter().map(|&i| self.museums[i].point()).collect();
        let clusters = cluster_points(&points, self.cluster_radius_km);
        let scale = RadiusScale::fit(&clusters, self.max_point_radius);

        self.view = FilteredView {
            indices,
            clusters,
            scale,
        };
    }

    /// Current derived view
    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Indices passing only the outer (region) filter
    ///
    /// This is the subset time-series aggregation works from: the series
    /// spans all years, so the date filter must not be applied first.
    pub fn region_filtered(&self) -> Vec<usize> {
        self.region_mask.iter_ones().collect()
    }

    pub fn museums(&self) -> &[Museum] {
        &self.museums
    }

    pub fn regions(&self) -> &RegionSelection {
        &self.regions
    }

    pub fn reference_year(&self) -> f64 {
        self.reference_year
    }
}
