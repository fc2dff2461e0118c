use serde::{Deserialize, Serialize};

/// An item offered in the auction, shaped after the `AuctionItem` GraphQL fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub starting_bid: Option<f64>,
    #[serde(default)]
    pub minimum_bid_increment: Option<f64>,
    #[serde(default)]
    pub buy_now_price: Option<f64>,
    #[serde(default)]
    pub estimated_value: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub auction_type: Option<String>,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub is_donor_public: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub restrictions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub auction_item_id: String,
    pub item_name: String,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    /// Source date string, formatted for display with `utils::format_date`.
    pub sold_at: String,
}
