//! Subscription resource and its nested sub-objects.
//!
//! Field-for-field binding of the platform's subscription payload: closed
//! enumerations for lifecycle and collection settings, epoch-second
//! timestamps, exact-decimal fee percentages, and expandable references to
//! the customer, payment method, invoice, schedule and transfer account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::common::{List, Metadata};
use crate::customers::Customer;
use crate::discounts::Discount;
use crate::expandable::{Expandable, Identified};
use crate::invoices::{CollectionMethod, Invoice};
use crate::payment_methods::{PaymentMethod, Source};
use crate::prices::{PlanInterval, Price};
use crate::setup_intents::SetupIntent;
use crate::tax_rates::TaxRate;
use crate::wire::{DecodeError, FromWire, Maybe, WireObject};

/// Lifecycle state of a subscription. The meaning of transitions between
/// these states belongs to the calling application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Incomplete,
    IncompleteExpired,
    Trialing,
    Active,
    PastDue,
    Canceled,
    Unpaid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subscription {
    pub id: String,
    pub object: String,
    /// Percentage of the invoice subtotal transferred to the application
    /// owner, kept at full decimal precision.
    #[serde(
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_fee_percent: Option<Decimal>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub billing_cycle_anchor: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_thresholds: Option<SubscriptionBillingThresholds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_at_period_end: Option<bool>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub cancel_at: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<CollectionMethod>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_period_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_due: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_source: Option<Expandable<Source>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tax_rates: Option<Vec<TaxRate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_customer_balance_settings: Option<SubscriptionInvoiceCustomerBalanceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<List<SubscriptionItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_invoice: Option<Expandable<Invoice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livemode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_pending_invoice_item_invoice: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_collection: Option<SubscriptionPauseCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_settings: Option<SubscriptionPaymentSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_invoice_item_interval: Option<SubscriptionPendingInvoiceInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_setup_intent: Option<Expandable<SetupIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_update: Option<SubscriptionPendingUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Expandable<SubscriptionSchedule>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_data: Option<SubscriptionTransferData>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub trial_end: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub trial_start: Option<DateTime<Utc>>,
}

impl FromWire for Subscription {
    const RESOURCE: &'static str = "subscription";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(Subscription {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            application_fee_percent: wire.opt_decimal("application_fee_percent")?,
            billing_cycle_anchor: wire.opt_timestamp("billing_cycle_anchor")?,
            billing_thresholds: wire.opt_record("billing_thresholds")?,
            cancel_at_period_end: wire.opt_bool("cancel_at_period_end")?,
            cancel_at: wire.opt_timestamp("cancel_at")?,
            canceled_at: wire.opt_timestamp("canceled_at")?,
            collection_method: wire.opt_enum("collection_method")?,
            created: wire.require_timestamp("created")?,
            current_period_end: wire.opt_timestamp("current_period_end")?,
            current_period_start: wire.opt_timestamp("current_period_start")?,
            customer: wire.opt_expandable("customer")?,
            days_until_due: wire.opt_u32("days_until_due")?,
            default_payment_method: wire.opt_expandable("default_payment_method")?,
            default_source: wire.opt_expandable("default_source")?,
            default_tax_rates: wire.opt_record_list("default_tax_rates")?,
            discount: wire.opt_record("discount")?,
            ended_at: wire.opt_timestamp("ended_at")?,
            invoice_customer_balance_settings: wire
                .opt_record("invoice_customer_balance_settings")?,
            items: wire.opt_record("items")?,
            latest_invoice: wire.opt_expandable("latest_invoice")?,
            livemode: wire.opt_bool("livemode")?,
            metadata: wire.opt_metadata("metadata")?,
            next_pending_invoice_item_invoice: wire
                .opt_timestamp("next_pending_invoice_item_invoice")?,
            pause_collection: wire.opt_record("pause_collection")?,
            payment_settings: wire.opt_record("payment_settings")?,
            pending_invoice_item_interval: wire.opt_record("pending_invoice_item_interval")?,
            pending_setup_intent: wire.opt_expandable("pending_setup_intent")?,
            pending_update: wire.opt_record("pending_update")?,
            schedule: wire.opt_expandable("schedule")?,
            start_date: wire.opt_timestamp("start_date")?,
            status: wire.opt_enum("status")?,
            transfer_data: wire.opt_record("transfer_data")?,
            trial_end: wire.opt_timestamp("trial_end")?,
            trial_start: wire.opt_timestamp("trial_start")?,
        })
    }
}

impl Identified for Subscription {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Invoice thresholds that advance the subscription to a new period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionBillingThresholds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_gte: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_billing_cycle_anchor: Option<bool>,
}

impl FromWire for SubscriptionBillingThresholds {
    const RESOURCE: &'static str = "billing_thresholds";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SubscriptionBillingThresholds {
            amount_gte: wire.opt_i64("amount_gte")?,
            reset_billing_cycle_anchor: wire.opt_bool("reset_billing_cycle_anchor")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionInvoiceCustomerBalanceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consume_applied_balance_on_void: Option<bool>,
}

impl FromWire for SubscriptionInvoiceCustomerBalanceSettings {
    const RESOURCE: &'static str = "invoice_customer_balance_settings";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SubscriptionInvoiceCustomerBalanceSettings {
            consume_applied_balance_on_void: wire.opt_bool("consume_applied_balance_on_void")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseCollectionBehavior {
    KeepAsDraft,
    MarkUncollectible,
    Void,
}

/// Payment collection pause attached to the subscription.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionPauseCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<PauseCollectionBehavior>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub resumes_at: Option<DateTime<Utc>>,
}

impl FromWire for SubscriptionPauseCollection {
    const RESOURCE: &'static str = "pause_collection";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SubscriptionPauseCollection {
            behavior: wire.opt_enum("behavior")?,
            resumes_at: wire.opt_timestamp("resumes_at")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestThreeDSecure {
    Automatic,
    Any,
}

/// Payment method types invoices created by the subscription may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    #[serde(rename = "ach_transfer_credit")]
    AchCreditTransfer,
    AchDebit,
    AuBecsDebit,
    BacsDebit,
    Bancontact,
    Boleto,
    Card,
    Eps,
    Fpx,
    Giropay,
    Ideal,
    P24,
    SepaDebit,
    Sofort,
    WechatPay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BancontactPaymentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
}

impl FromWire for BancontactPaymentOptions {
    const RESOURCE: &'static str = "bancontact_payment_options";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(BancontactPaymentOptions {
            preferred_language: wire.opt_str("preferred_language")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPaymentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_three_d_secure: Option<RequestThreeDSecure>,
}

impl FromWire for CardPaymentOptions {
    const RESOURCE: &'static str = "card_payment_options";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(CardPaymentOptions {
            request_three_d_secure: wire.opt_enum("request_three_d_secure")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMethodOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bancontact: Option<BancontactPaymentOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardPaymentOptions>,
}

impl FromWire for PaymentMethodOptions {
    const RESOURCE: &'static str = "payment_method_options";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(PaymentMethodOptions {
            bancontact: wire.opt_record("bancontact")?,
            card: wire.opt_record("card")?,
        })
    }
}

/// Payment settings passed on to invoices created by the subscription.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionPaymentSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_options: Option<PaymentMethodOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_types: Option<Vec<PaymentMethodType>>,
}

impl FromWire for SubscriptionPaymentSettings {
    const RESOURCE: &'static str = "payment_settings";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SubscriptionPaymentSettings {
            payment_method_options: wire.opt_record("payment_method_options")?,
            payment_method_types: wire.opt_enum_list("payment_method_types")?,
        })
    }
}

/// How often pending invoice items are rolled into an invoice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionPendingInvoiceInterval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<PlanInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_count: Option<i64>,
}

impl FromWire for SubscriptionPendingInvoiceInterval {
    const RESOURCE: &'static str = "pending_invoice_item_interval";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SubscriptionPendingInvoiceInterval {
            interval: wire.opt_enum("interval")?,
            interval_count: wire.opt_i64("interval_count")?,
        })
    }
}

/// Changes that apply once the latest invoice is paid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionPendingUpdate {
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub billing_cycle_anchor: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_items: Option<Vec<SubscriptionItem>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub trial_end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_from_plan: Option<bool>,
}

impl FromWire for SubscriptionPendingUpdate {
    const RESOURCE: &'static str = "pending_update";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SubscriptionPendingUpdate {
            billing_cycle_anchor: wire.opt_timestamp("billing_cycle_anchor")?,
            expires_at: wire.opt_timestamp("expires_at")?,
            subscription_items: wire.opt_record_list("subscription_items")?,
            trial_end: wire.opt_timestamp("trial_end")?,
            trial_from_plan: wire.opt_bool("trial_from_plan")?,
        })
    }
}

/// Account the subscription's payments are attributed and transferred to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionTransferData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Expandable<Account>>,
}

impl FromWire for SubscriptionTransferData {
    const RESOURCE: &'static str = "transfer_data";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SubscriptionTransferData {
            amount_percent: wire.opt_i64("amount_percent")?,
            destination: wire.opt_expandable("destination")?,
        })
    }
}

/// One plan-bearing line of a subscription.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionItem {
    pub id: String,
    pub object: String,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rates: Option<Vec<TaxRate>>,
}

impl FromWire for SubscriptionItem {
    const RESOURCE: &'static str = "subscription_item";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SubscriptionItem {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            created: wire.opt_timestamp("created")?,
            metadata: wire.opt_metadata("metadata")?,
            price: wire.opt_record("price")?,
            quantity: wire.opt_u64("quantity")?,
            subscription: wire.opt_str("subscription")?,
            tax_rates: wire.opt_record_list("tax_rates")?,
        })
    }
}

impl Identified for SubscriptionItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Schedule driving phased changes to the subscription.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionSchedule {
    pub id: String,
    pub object: String,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

impl FromWire for SubscriptionSchedule {
    const RESOURCE: &'static str = "subscription_schedule";

    fn from_wire(wire: &WireObject<'_>) -> Result<Self, DecodeError> {
        Ok(SubscriptionSchedule {
            id: wire.require_str("id")?,
            object: wire.require_str("object")?,
            created: wire.opt_timestamp("created")?,
            status: wire.opt_str("status")?,
            subscription: wire.opt_str("subscription")?,
        })
    }
}

impl Identified for SubscriptionSchedule {
    fn id(&self) -> &str {
        &self.id
    }
}

/// What to do when an update requires a payment that cannot be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentBehavior {
    AllowIncomplete,
    ErrorIfIncomplete,
    PendingIfIncomplete,
    DefaultIncomplete,
}

/// Whether and how an update creates prorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationBehavior {
    CreateProrations,
    None,
    AlwaysInvoice,
}

/// Request body for updating a subscription. Fields left `Absent` stay off
/// the wire; `Null` sends an explicit `null` to clear the server value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSubscriptionRequest {
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub cancel_at_period_end: Maybe<bool>,
    #[serde(
        with = "crate::wire::maybe_ts_seconds",
        skip_serializing_if = "Maybe::is_absent"
    )]
    pub cancel_at: Maybe<DateTime<Utc>>,
    #[serde(
        with = "crate::wire::maybe_ts_seconds",
        skip_serializing_if = "Maybe::is_absent"
    )]
    pub trial_end: Maybe<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub collection_method: Maybe<CollectionMethod>,
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub days_until_due: Maybe<u32>,
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub default_payment_method: Maybe<String>,
    #[serde(
        with = "crate::wire::maybe_decimal",
        skip_serializing_if = "Maybe::is_absent"
    )]
    pub application_fee_percent: Maybe<Decimal>,
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub payment_behavior: Maybe<PaymentBehavior>,
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub proration_behavior: Maybe<ProrationBehavior>,
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub metadata: Maybe<Metadata>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::{Value, json};

    use super::*;
    use crate::wire::{decode, encode};

    fn subscription_payload() -> Value {
        json!({
            "id": "sub_123",
            "object": "subscription",
            "application_fee_percent": 12.75,
            "billing_cycle_anchor": 1_700_003_600,
            "billing_thresholds": {"amount_gte": 10_000, "reset_billing_cycle_anchor": false},
            "cancel_at_period_end": false,
            "collection_method": "charge_automatically",
            "created": 1_700_000_000,
            "current_period_start": 1_700_000_000,
            "current_period_end": 1_702_592_000,
            "customer": "cus_123",
            "default_payment_method": "pm_123",
            "default_tax_rates": [
                {"id": "txr_1", "object": "tax_rate", "display_name": "VAT", "percentage": 19.0},
            ],
            "items": {
                "object": "list",
                "has_more": false,
                "url": "/v1/subscription_items?subscription=sub_123",
                "data": [
                    {
                        "id": "si_1",
                        "object": "subscription_item",
                        "created": 1_700_000_000,
                        "quantity": 2,
                        "subscription": "sub_123",
                        "price": {
                            "id": "price_1",
                            "object": "price",
                            "currency": "usd",
                            "unit_amount": 1500,
                            "recurring": {"interval": "month", "interval_count": 1},
                        },
                    },
                ],
            },
            "latest_invoice": "in_123",
            "livemode": false,
            "metadata": {"plan_tier": "scale"},
            "pause_collection": {"behavior": "keep_as_draft", "resumes_at": 1_702_000_000},
            "payment_settings": {
                "payment_method_options": {
                    "bancontact": {"preferred_language": "fr"},
                    "card": {"request_three_d_secure": "automatic"},
                },
                "payment_method_types": ["card", "sepa_debit"],
            },
            "pending_invoice_item_interval": {"interval": "month", "interval_count": 1},
            "start_date": 1_700_000_000,
            "status": "active",
            "transfer_data": {"amount_percent": 80, "destination": "acct_123"},
            "trial_start": 1_700_000_000,
            "trial_end": 1_701_000_000,
        })
    }

    #[test]
    fn test_decode_full_subscription() {
        let subscription: Subscription = decode(&subscription_payload()).unwrap();
        assert_eq!(subscription.id, "sub_123");
        assert_eq!(subscription.created.timestamp(), 1_700_000_000);
        assert_eq!(subscription.status, Some(SubscriptionStatus::Active));
        assert_eq!(
            subscription.collection_method,
            Some(CollectionMethod::ChargeAutomatically)
        );
        assert_eq!(
            subscription.application_fee_percent,
            Some(Decimal::from_str("12.75").unwrap())
        );
        assert_eq!(subscription.customer.as_ref().unwrap().id(), "cus_123");
        assert_eq!(
            subscription.latest_invoice.as_ref().unwrap().id(),
            "in_123"
        );

        let items = subscription.items.as_ref().unwrap();
        assert_eq!(items.has_more, Some(false));
        let item = &items.data.as_deref().unwrap()[0];
        assert_eq!(item.quantity, Some(2));
        assert_eq!(item.price.as_ref().unwrap().unit_amount, Some(1500));

        let settings = subscription.payment_settings.as_ref().unwrap();
        assert_eq!(
            settings.payment_method_types.as_deref(),
            Some(&[PaymentMethodType::Card, PaymentMethodType::SepaDebit][..])
        );
        assert_eq!(
            settings
                .payment_method_options
                .as_ref()
                .unwrap()
                .card
                .as_ref()
                .unwrap()
                .request_three_d_secure,
            Some(RequestThreeDSecure::Automatic)
        );
        assert_eq!(
            subscription.pause_collection.as_ref().unwrap().behavior,
            Some(PauseCollectionBehavior::KeepAsDraft)
        );
        assert_eq!(
            subscription.transfer_data.as_ref().unwrap().destination.as_ref().unwrap().id(),
            "acct_123"
        );
    }

    #[test]
    fn test_encode_reproduces_payload() {
        let payload = subscription_payload();
        let subscription: Subscription = decode(&payload).unwrap();
        assert_eq!(encode(&subscription).unwrap(), payload);
    }

    #[test]
    fn test_repeated_cycles_are_stable() {
        let first: Subscription = decode(&subscription_payload()).unwrap();
        let encoded = encode(&first).unwrap();
        let second: Subscription = decode(&encoded).unwrap();
        assert_eq!(second, first);
        assert_eq!(encode(&second).unwrap(), encoded);
    }

    #[test]
    fn test_absent_optionals_stay_unset() {
        let subscription: Subscription = decode(&json!({
            "id": "sub_123",
            "object": "subscription",
            "created": 1_700_000_000,
        }))
        .unwrap();
        assert_eq!(subscription.trial_end, None);
        assert_eq!(subscription.days_until_due, None);
        assert_eq!(subscription.status, None);
        assert_eq!(subscription.items, None);
        assert_eq!(subscription.metadata, None);
    }

    #[test]
    fn test_explicit_null_equals_absent() {
        let with_nulls: Subscription = decode(&json!({
            "id": "sub_123",
            "object": "subscription",
            "created": 1_700_000_000,
            "trial_end": null,
            "customer": null,
            "metadata": null,
        }))
        .unwrap();
        let without: Subscription = decode(&json!({
            "id": "sub_123",
            "object": "subscription",
            "created": 1_700_000_000,
        }))
        .unwrap();
        assert_eq!(with_nulls, without);
    }

    #[test]
    fn test_missing_required_field() {
        let err = decode::<Subscription>(&json!({
            "object": "subscription",
            "created": 1_700_000_000,
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                resource: "subscription",
                path: "id".into(),
            }
        );
    }

    #[test]
    fn test_status_trialing_decodes() {
        let subscription: Subscription = decode(&json!({
            "id": "sub_123",
            "object": "subscription",
            "created": 1_700_000_000,
            "status": "trialing",
        }))
        .unwrap();
        assert_eq!(subscription.status, Some(SubscriptionStatus::Trialing));
    }

    #[test]
    fn test_status_rejects_unknown_literal() {
        let err = decode::<Subscription>(&json!({
            "id": "sub_123",
            "object": "subscription",
            "created": 1_700_000_000,
            "status": "bogus_status",
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownEnumValue {
                resource: "subscription",
                path: "status".into(),
                value: "bogus_status".into(),
            }
        );
    }

    #[test]
    fn test_customer_bare_identifier() {
        let subscription: Subscription = decode(&json!({
            "id": "sub_123",
            "object": "subscription",
            "created": 1_700_000_000,
            "customer": "cus_123",
        }))
        .unwrap();
        let customer = subscription.customer.unwrap();
        assert_eq!(customer.id(), "cus_123");
        assert!(customer.object().is_none());
    }

    #[test]
    fn test_customer_expanded_object() {
        let subscription: Subscription = decode(&json!({
            "id": "sub_123",
            "object": "subscription",
            "created": 1_700_000_000,
            "customer": {
                "id": "cus_123",
                "object": "customer",
                "email": "jo@example.com",
            },
        }))
        .unwrap();
        let customer = subscription.customer.unwrap();
        assert_eq!(customer.id(), "cus_123");
        assert_eq!(
            customer.object().unwrap().email.as_deref(),
            Some("jo@example.com")
        );
    }

    #[test]
    fn test_nested_error_path_through_items() {
        let err = decode::<Subscription>(&json!({
            "id": "sub_123",
            "object": "subscription",
            "created": 1_700_000_000,
            "items": {
                "object": "list",
                "data": [{
                    "id": "si_1",
                    "object": "subscription_item",
                    "price": {
                        "id": "price_1",
                        "object": "price",
                        "recurring": {"interval": "fortnight"},
                    },
                }],
            },
        }))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownEnumValue {
                resource: "subscription",
                path: "items.data[0].price.recurring.interval".into(),
                value: "fortnight".into(),
            }
        );
    }

    #[test]
    fn test_payment_method_type_wire_literals() {
        assert_eq!(
            encode(&PaymentMethodType::AchCreditTransfer).unwrap(),
            json!("ach_transfer_credit")
        );
        assert_eq!(encode(&PaymentMethodType::P24).unwrap(), json!("p24"));
        assert_eq!(
            encode(&PaymentMethodType::WechatPay).unwrap(),
            json!("wechat_pay")
        );
    }

    #[test]
    fn test_request_enums_wire_literals() {
        assert_eq!(
            encode(&PaymentBehavior::DefaultIncomplete).unwrap(),
            json!("default_incomplete")
        );
        assert_eq!(encode(&ProrationBehavior::None).unwrap(), json!("none"));
        assert_eq!(
            encode(&ProrationBehavior::AlwaysInvoice).unwrap(),
            json!("always_invoice")
        );
    }

    #[test]
    fn test_update_request_three_states() {
        let request = UpdateSubscriptionRequest {
            cancel_at_period_end: Maybe::Value(true),
            trial_end: Maybe::Null,
            proration_behavior: Maybe::Value(ProrationBehavior::CreateProrations),
            ..Default::default()
        };
        let encoded = encode(&request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "cancel_at_period_end": true,
                "trial_end": null,
                "proration_behavior": "create_prorations",
            })
        );
    }

    #[test]
    fn test_update_request_timestamp_and_decimal() {
        let request = UpdateSubscriptionRequest {
            trial_end: Maybe::Value(chrono::DateTime::from_timestamp(1_701_000_000, 0).unwrap()),
            application_fee_percent: Maybe::Value(Decimal::from_str("2.5").unwrap()),
            ..Default::default()
        };
        let encoded = encode(&request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "trial_end": 1_701_000_000,
                "application_fee_percent": 2.5,
            })
        );
    }

    #[test]
    fn test_concurrent_decodes_match_sequential() {
        let payload = subscription_payload();
        let expected: Subscription = decode(&payload).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| decode::<Subscription>(&payload).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
