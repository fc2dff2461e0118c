// GraphQL fragments shared by every query that returns auction items.
// The selection set must stay in step with `models::AuctionItem`.

pub const AUCTION_ITEM_FRAGMENT_NAME: &str = "AuctionItem";

/// Fields selected by the `AuctionItem` fragment, in declaration order.
pub const AUCTION_ITEM_FIELDS: [&str; 14] = [
    "id",
    "name",
    "description",
    "imageURL",
    "startingBid",
    "minimumBidIncrement",
    "buyNowPrice",
    "estimatedValue",
    "category",
    "auctionType",
    "donorName",
    "isDonorPublic",
    "status",
    "restrictions",
];

pub const AUCTION_ITEM_FRAGMENT: &str = r#"fragment AuctionItem on AuctionItem {
  id
  name
  description
  imageURL
  startingBid
  minimumBidIncrement
  buyNowPrice
  estimatedValue
  category
  auctionType
  donorName
  isDonorPublic
  status
  restrictions
}"#;

/// Appends the fragment definition to a query document that spreads `...AuctionItem`.
pub fn with_auction_item_fragment(query: &str) -> String {
    format!("{}\n\n{}", query.trim_end(), AUCTION_ITEM_FRAGMENT)
}
