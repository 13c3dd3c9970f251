use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Traversed once, ending where it started.
    Circular,
    /// Traversed to the last stop and back again.
    Linear,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<String>,
    pub kind: RouteKind,
}

impl Bus {
    pub fn new(name: String, stops: Vec<String>, kind: RouteKind) -> Self {
        Self { name, stops, kind }
    }

    pub fn is_circular(&self) -> bool {
        self.kind == RouteKind::Circular
    }

    /// Number of stops visited on one full trip.
    pub fn stop_count(&self) -> usize {
        match self.kind {
            RouteKind::Circular => self.stops.len(),
            RouteKind::Linear => 2 * self.stops.len() - 1,
        }
    }

    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().unique().count()
    }

    /// Stops in the order a bus passes them before turning back.
    ///
    /// A circular route whose list does not end at its first stop still
    /// drives back to it, so the first stop is repeated at the end.
    pub fn outbound(&self) -> Vec<&str> {
        let mut stops = self.stops.iter().map(String::as_str).collect_vec();
        if self.kind == RouteKind::Circular && self.stops.first() != self.stops.last() {
            if let Some(first) = stops.first().copied() {
                stops.push(first);
            }
        }
        stops
    }

    /// Consecutive stop pairs in the order a bus drives them on one trip.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &str)> {
        let forward = self.outbound().into_iter().tuple_windows();

        let backward = self
            .stops
            .iter()
            .rev()
            .tuple_windows()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .filter(|_| self.kind == RouteKind::Linear);

        forward.chain(backward)
    }
}
