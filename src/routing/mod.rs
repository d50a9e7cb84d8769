mod apps;
mod router;
mod table;

pub use apps::{LegacyView, SpotShareView, legacy_routes, spotshare_routes};
pub use router::Router;
pub use table::{Route, RouteResolution, RouteTable, RouteTarget, normalize_path};
