//! The finite set of pages and the path table that selects them.
//!
//! DESIGN
//! ======
//! Pages are an enum rather than string keys so the page renderer can match
//! exhaustively; adding a variant without a page is a compile error.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

const PURCHASE_ORDERS_PREFIX: &str = "/stock/purchase-orders/";

/// Every page reachable through the client router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Pricing,
    Billing,
    Dashboard,
    Sectors,
    Assets,
    Workers,
    Tools,
    SpareParts,
    Suppliers,
    PreventivePlans,
    PreventivePlanNew,
    WorkOrders,
    PurchaseOrders,
    PurchaseOrderNew,
    /// Editor for an existing purchase order, keyed by its backend id.
    PurchaseOrderEdit(i64),
    GeneralSettings,
}

/// Static path → route table. `PurchaseOrderEdit` is the only parameterized
/// route and is matched separately.
const STATIC_ROUTES: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/login", Route::Login),
    ("/register", Route::Register),
    ("/pricing", Route::Pricing),
    ("/billing", Route::Billing),
    ("/dashboard", Route::Dashboard),
    ("/archives/sectors", Route::Sectors),
    ("/archives/assets", Route::Assets),
    ("/archives/workers", Route::Workers),
    ("/archives/tools", Route::Tools),
    ("/archives/spare-parts", Route::SpareParts),
    ("/archives/suppliers", Route::Suppliers),
    ("/preventive/plans", Route::PreventivePlans),
    ("/preventive/new", Route::PreventivePlanNew),
    ("/work-orders", Route::WorkOrders),
    ("/stock/purchase-orders", Route::PurchaseOrders),
    ("/stock/purchase-orders/new", Route::PurchaseOrderNew),
    ("/settings/general", Route::GeneralSettings),
];

impl Route {
    /// Look up a normalized path. Returns `None` for unknown paths.
    pub fn from_path(path: &str) -> Option<Self> {
        if let Some((_, route)) = STATIC_ROUTES.iter().find(|(p, _)| *p == path) {
            return Some(*route);
        }
        let id = path.strip_prefix(PURCHASE_ORDERS_PREFIX)?;
        // Only the canonical form `path()` produces: digits, no leading zero.
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) || (id.len() > 1 && id.starts_with('0')) {
            return None;
        }
        id.parse().ok().map(Route::PurchaseOrderEdit)
    }

    /// Look up a normalized path, falling back to the login page.
    pub fn resolve(path: &str) -> Self {
        Self::from_path(path).unwrap_or(Route::Login)
    }

    /// Canonical (already normalized) path for this route.
    pub fn path(self) -> String {
        if let Route::PurchaseOrderEdit(id) = self {
            return format!("{PURCHASE_ORDERS_PREFIX}{id}");
        }
        STATIC_ROUTES
            .iter()
            .find(|(_, route)| *route == self)
            .map_or_else(|| "/login".to_owned(), |(path, _)| (*path).to_owned())
    }

    /// Whether the route is reachable without an authenticated session.
    pub fn is_public(self) -> bool {
        matches!(self, Route::Home | Route::Login | Route::Register | Route::Pricing)
    }

    /// Document title for the page.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "MantenPro",
            Route::Login => "Ingresar",
            Route::Register => "Registro",
            Route::Pricing => "Precios",
            Route::Billing => "Facturación",
            Route::Dashboard => "Panel de Control",
            Route::Sectors => "Sectores",
            Route::Assets => "Activos",
            Route::Workers => "Personal",
            Route::Tools => "Herramientas",
            Route::SpareParts => "Repuestos",
            Route::Suppliers => "Proveedores",
            Route::PreventivePlans => "Planes Preventivos",
            Route::PreventivePlanNew => "Nuevo Plan",
            Route::WorkOrders => "Órdenes de Trabajo",
            Route::PurchaseOrders => "Órdenes de Compra",
            Route::PurchaseOrderNew => "Nueva Orden de Compra",
            Route::PurchaseOrderEdit(_) => "Editar Orden de Compra",
            Route::GeneralSettings => "Configuración General",
        }
    }

    /// All statically addressable routes, in table order.
    pub fn statics() -> impl Iterator<Item = Route> {
        STATIC_ROUTES.iter().map(|(_, route)| *route)
    }
}
