//! Purpose file contents shared across tests.

/// Top-level purpose with one composed purpose and one recipient
pub const BILLING: &str = r#"{
  "name": "com.shop.Billing",
  "description": "Charge customers",
  "optOut": false,
  "required": true,
  "retention": null,
  "pm": null,
  "data": ["person.email", "person.iban"],
  "transfers": [
    {"recipientId": "stripe", "policyURL": "https://stripe.com/privacy"}
  ],
  "purposes": [
    {
      "name": "com.shop.Billing#charge(java.lang.String)",
      "description": "",
      "data": ["person.iban"],
      "transfers": [],
      "purposes": []
    }
  ]
}"#;

/// Top-level purpose sharing a category and a recipient with `BILLING`
pub const SHIPPING: &str = r#"{
  "name": "com.shop.Shipping",
  "data": ["person.address", "person.email"],
  "transfers": [
    {"recipientId": "dhl", "policyURL": "https://dhl.com/privacy"},
    {"recipientId": "stripe", "policyURL": "https://stripe.com/privacy"}
  ]
}"#;

/// Top-level purpose without any data; dropped from the report
pub const DATALESS: &str = r#"{
  "name": "com.shop.Nothing",
  "data": [],
  "purposes": [{"name": "com.shop.Nothing#x()", "data": ["person.email"]}]
}"#;

/// Kept record without a name
pub const NAMELESS: &str = r#"{"data": ["person.email"]}"#;

/// Not valid JSON
pub const BROKEN: &str = r#"{"name": "com.shop.Broken", "data": ["a",]}"#;
