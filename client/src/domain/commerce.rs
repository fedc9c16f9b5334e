//! Marketplace records: transactions, NFT listings and the cart.
//!
//! Transactions and listings are transport shapes only; no facade in this
//! crate creates or mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Post;

/// Settlement state of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting payment confirmation.
    Pending,
    /// Paid and settled.
    Completed,
    /// Abandoned or refunded.
    Cancelled,
}

/// Payment provider used for a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card payment through Stripe.
    Stripe,
    /// PayPal checkout.
    Paypal,
}

/// A purchase of a post's item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Backend identifier.
    pub id: String,
    /// Buyer id.
    pub buyer_id: String,
    /// Seller id.
    pub seller_id: String,
    /// Purchased post.
    pub post_id: String,
    /// Amount in the account currency.
    pub amount: f64,
    /// Settlement state.
    pub status: TransactionStatus,
    /// Provider.
    pub payment_method: PaymentMethod,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Auction state of an NFT listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Accepting bids.
    Active,
    /// Auction completed with a winner.
    Sold,
    /// Auction ended without a sale.
    Expired,
}

/// An NFT auction attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftListing {
    /// Backend identifier.
    pub id: String,
    /// Listed post.
    pub post_id: String,
    /// Current owner id.
    pub owner_id: String,
    /// Opening bid.
    pub starting_bid: f64,
    /// Highest bid so far.
    pub current_bid: f64,
    /// Auction close time.
    pub auction_end_date: DateTime<Utc>,
    /// Auction state.
    pub status: ListingStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A cart line.
///
/// `post` is a copy taken when the item was added; later edits to the feed
/// do not reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Id of the snapshotted post.
    pub post_id: String,
    /// Snapshot of the post.
    pub post: Post,
    /// When the item was added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Snapshot `post` into a new cart line.
    pub fn snapshot(post: &Post, added_at: DateTime<Utc>) -> Self {
        Self {
            post_id: post.id.clone(),
            post: post.clone(),
            added_at,
        }
    }
}
