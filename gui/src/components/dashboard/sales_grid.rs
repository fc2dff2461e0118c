// Sales tab. Only counts the sales until the DataGrid component exists.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::Sale;

#[component]
pub fn SalesGrid(sales: Vec<Sale>) -> Element {
    let count = sales.len();

    rsx! {
        div {
            class: "tab-content sales-grid",
            h2 { "Sales" }
            p { class: "sales-count", "{count} sales" }
            // TODO: Implement the sales table using the DataGrid component
            p { class: "placeholder-note", "The sales table will be built on the DataGrid component." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(id: &str) -> Sale {
        Sale {
            id: id.to_string(),
            auction_item_id: format!("item-{}", id),
            item_name: format!("Lot {}", id),
            buyer_name: None,
            amount: Some(50.0),
            sold_at: "2024-03-15T14:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_sales_grid_empty() {
        let html = dioxus_ssr::render_element(rsx! { SalesGrid { sales: Vec::new() } });
        assert!(html.contains("0 sales"));
    }

    #[test]
    fn test_sales_grid_counts_sales() {
        let sales = vec![sale("1"), sale("2"), sale("3")];
        let html = dioxus_ssr::render_element(rsx! { SalesGrid { sales: sales } });
        assert!(html.contains("3 sales"));
        assert!(!html.contains("Lot 1"));
    }
}
