// ============================================================================
// Access Core - Static Catalogs
// File: crates/access-core/src/catalog.rs
// Description: Menu tree, route table and POS options for the back-office
// ============================================================================

use std::fs;
use std::path::Path;

use access_shared::config::CatalogSettings;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::{
    MenuItemDef, MenuTree, PosCatalog, PosCategory, PosOption, RouteRule, RouteTable,
};
use crate::error::DomainError;

/// The three static tables every decision is made against
#[derive(Debug, Clone)]
pub struct AccessCatalog {
    pub menu: MenuTree,
    pub routes: RouteTable,
    pub pos: PosCatalog,
}

impl AccessCatalog {
    pub fn new(menu: MenuTree, routes: RouteTable, pos: PosCatalog) -> Self {
        Self { menu, routes, pos }
    }

    /// Restaurant back-office defaults
    pub fn builtin() -> Result<Self, DomainError> {
        Ok(Self {
            menu: MenuTree::from_nested(builtin_menu())?,
            routes: RouteTable::new(builtin_routes())?,
            pos: PosCatalog::new(builtin_pos_options())?,
        })
    }

    /// Each configured file replaces the matching built-in table.
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, DomainError> {
        let menu = match &settings.menu_path {
            Some(path) => MenuTree::from_definitions(read_json(path)?)?,
            None => MenuTree::from_nested(builtin_menu())?,
        };
        let routes = match &settings.routes_path {
            Some(path) => RouteTable::new(read_json(path)?)?,
            None => RouteTable::new(builtin_routes())?,
        };
        let pos = match &settings.pos_path {
            Some(path) => PosCatalog::new(read_json(path)?)?,
            None => PosCatalog::new(builtin_pos_options())?,
        };

        info!(
            menu_items = menu.len(),
            routes = routes.len(),
            pos_options = pos.len(),
            "Access catalog loaded"
        );
        Ok(Self { menu, routes, pos })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| DomainError::CatalogLoadError(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| DomainError::CatalogLoadError(format!("{}: {}", path.display(), e)))
}

pub fn builtin_menu() -> Vec<MenuItemDef> {
    vec![
        MenuItemDef::new("dashboard", "Dashboard").url("/dashboard"),
        MenuItemDef::new("sales", "Sales").children(vec![
            MenuItemDef::new("pos", "Point of Sale").url("/sales/pos"),
            MenuItemDef::new("invoice", "Invoices").url("/sales/invoice"),
            MenuItemDef::new("order-history", "Order History").url("/sales/orders"),
        ]),
        MenuItemDef::new("menu", "Menu").children(vec![
            MenuItemDef::new("menu-list", "Menu List").url("/menu/list"),
            MenuItemDef::new("menu-create", "Add Menu").url("/menu/create"),
            MenuItemDef::new("category", "Categories").url("/menu/category"),
            MenuItemDef::new("meal-plan", "Meal Plans").url("/menu/meal-plan"),
        ]),
        MenuItemDef::new("inventory", "Inventory").children(vec![
            MenuItemDef::new("stock", "Stock").url("/inventory/stock"),
            MenuItemDef::new("purchase", "Purchases").url("/inventory/purchase"),
            MenuItemDef::new("supplier", "Suppliers").url("/inventory/supplier"),
        ]),
        MenuItemDef::new("expense", "Expenses").children(vec![
            MenuItemDef::new("expense-list", "Expense List").url("/expense/list"),
            MenuItemDef::new("expense-category", "Expense Categories").url("/expense/category"),
        ]),
        MenuItemDef::new("staff", "Staff").children(vec![
            MenuItemDef::new("cashier-list", "Cashiers").url("/staff/cashier-list"),
            MenuItemDef::new("waiter-list", "Waiters").url("/staff/waiter-list"),
            MenuItemDef::new("attendance", "Attendance").url("/staff/attendance"),
        ]),
        MenuItemDef::new("reports", "Reports").children(vec![
            MenuItemDef::new("sales-report", "Sales Report").url("/reports/sales"),
            MenuItemDef::new("vat", "VAT Report").url("/reports/vat"),
            MenuItemDef::new("expense-report", "Expense Report").url("/reports/expense"),
        ]),
        MenuItemDef::new("role-access", "Role Access").children(vec![
            MenuItemDef::new("roles", "Roles").url("/role-access/roles"),
            MenuItemDef::new("user-access", "User Access").url("/role-access/users"),
        ]),
        MenuItemDef::new("settings", "Settings").children(vec![
            MenuItemDef::new("store-info", "Store Info").url("/settings/store"),
            MenuItemDef::new("printer", "Printers").url("/settings/printer"),
        ]),
    ]
}

pub fn builtin_routes() -> Vec<RouteRule> {
    vec![
        RouteRule::module("/sales", "sales"),
        RouteRule::sub_module("/sales/pos", "sales", "pos"),
        RouteRule::sub_module("/sales/invoice", "sales", "invoice"),
        RouteRule::sub_module("/sales/orders", "sales", "order-history"),
        RouteRule::module("/menu", "menu"),
        RouteRule::sub_module("/menu/list", "menu", "menu-list"),
        RouteRule::sub_module("/menu/edit/[id]", "menu", "menu-list"),
        RouteRule::sub_module("/menu/create", "menu", "menu-create"),
        RouteRule::sub_module("/menu/category", "menu", "category"),
        RouteRule::sub_module("/menu/meal-plan", "menu", "meal-plan"),
        RouteRule::module("/inventory", "inventory"),
        RouteRule::sub_module("/inventory/stock", "inventory", "stock"),
        RouteRule::sub_module("/inventory/purchase", "inventory", "purchase"),
        RouteRule::sub_module("/inventory/supplier", "inventory", "supplier"),
        RouteRule::module("/expense", "expense"),
        RouteRule::sub_module("/expense/list", "expense", "expense-list"),
        RouteRule::sub_module("/expense/category", "expense", "expense-category"),
        RouteRule::module("/staff", "staff"),
        RouteRule::sub_module("/staff/cashier-list", "staff", "cashier-list"),
        RouteRule::sub_module("/staff/waiter-list", "staff", "waiter-list"),
        RouteRule::sub_module("/staff/attendance", "staff", "attendance"),
        RouteRule::module("/reports", "reports"),
        RouteRule::sub_module("/reports/sales", "reports", "sales-report"),
        RouteRule::sub_module("/reports/vat", "reports", "vat"),
        RouteRule::sub_module("/reports/expense", "reports", "expense-report"),
        RouteRule::module("/role-access", "role-access"),
        RouteRule::sub_module("/role-access/roles", "role-access", "roles"),
        RouteRule::sub_module("/role-access/users", "role-access", "user-access"),
        RouteRule::module("/settings", "settings"),
        RouteRule::sub_module("/settings/store", "settings", "store-info"),
        RouteRule::sub_module("/settings/printer", "settings", "printer"),
        RouteRule::module("/pos/settlement", "pos"),
    ]
}

pub fn builtin_pos_options() -> Vec<PosOption> {
    vec![
        PosOption::new("hold-order", "Hold Order", PosCategory::Order),
        PosOption::new("void", "Void Item", PosCategory::Order),
        PosOption::new("reprint", "Reprint Receipt", PosCategory::Order),
        PosOption::new("split-bill", "Split Bill", PosCategory::Payment),
        PosOption::new("refund", "Refund", PosCategory::Payment),
        PosOption::new("discount", "Discount", PosCategory::Adjustment),
        PosOption::new("price-override", "Price Override", PosCategory::Adjustment),
        PosOption::new("complimentary", "Complimentary Item", PosCategory::Adjustment),
        PosOption::new("open-drawer", "Open Cash Drawer", PosCategory::Cash),
    ]
}
