//! Integration tests for the gateway translation layer.
//!
//! Exercises configuration, the service registry, operation routing, and the
//! encode/decode pipeline end to end through the public API. No network is
//! involved; the wire format itself is the subject.

use billpay_client::{
    BillPayClient, BillPayError,
    config::BillPayConfig,
    model::{
        Address, Bill, BillPayRequest, BillPresentment, CardData, Customer, HostedPaymentType,
        PaymentMethod, TransactionIntent,
    },
    registry,
    soap::{
        envelope::build_envelope, operations::GatewayOperation, requests::encode_request,
        responses::decode_response,
    },
};
use rust_decimal_macros::dec;

fn sample_config(merchant: &str) -> BillPayConfig {
    BillPayConfig::new(
        merchant,
        "IntegrationTestCashier",
        "G?vaXhg6<@V'Y)-m",
        "https://billpay.example.com/BillingDataManagement",
    )
}

fn card() -> PaymentMethod {
    PaymentMethod::Card(CardData {
        number: "4444444444444448".to_owned(),
        expiration_month: 12,
        expiration_year: 2027,
        security_code: Some("123".to_owned()),
        card_holder_name: Some("Test Tester".to_owned()),
    })
}

#[test]
fn test_full_configuration_flow() {
    let toml = r#"
        merchant_name = "IntegrationTesting"
        username = "IntegrationTestCashier"
        password = "secret"
        service_url = "https://billpay.example.com/BillingDataManagement"

        [http]
        timeout_secs = 60
        pool_max_idle_per_host = 4
    "#;

    let config = BillPayConfig::from_toml(toml).expect("should parse valid TOML");

    assert_eq!(config.merchant_name, "IntegrationTesting");
    assert_eq!(config.http.timeout_secs, 60);
    assert_eq!(config.http.pool_max_idle_per_host, 4);

    let client = BillPayClient::new(config).expect("config should build a client");
    assert_eq!(client.config().merchant_name, "IntegrationTesting");
}

#[test]
fn test_registry_named_services_resolve_independently() {
    registry::configure(sample_config("IntegrationTesting")).unwrap();
    registry::configure_named("it-billload", sample_config("IntegrationTestingBillUpload"))
        .unwrap();

    let default_client = BillPayClient::from_registry(None).unwrap();
    let load_client = BillPayClient::from_registry(Some("it-billload")).unwrap();

    assert_eq!(default_client.config().merchant_name, "IntegrationTesting");
    assert_eq!(load_client.config().merchant_name, "IntegrationTestingBillUpload");

    let err = BillPayClient::from_registry(Some("it-missing")).unwrap_err();
    assert!(matches!(err, BillPayError::Config(_)));
}

#[test]
fn test_charge_encode_decode_round_trip() {
    let mut request = BillPayRequest::new(TransactionIntent::Sale {
        bill_data_hosted: true,
        request_multi_use_token: false,
    });
    request.amount = dec!(50);
    request.currency = Some("USD".to_owned());
    request.bills = vec![Bill::new("12345", dec!(50))];
    request.payment_method = Some(card());

    let operation = GatewayOperation::select(&request).unwrap();
    assert_eq!(operation, GatewayOperation::MakePayment);

    let body = encode_request(operation, &request).unwrap();
    assert!(body.contains("<Amount>50.00</Amount>"));

    let config = sample_config("IntegrationTesting");
    let envelope = build_envelope(&config.credentials(), &body);
    assert!(envelope.contains("<soapenv:Body><MakePayment>"));
    // Password carries '<' and must arrive escaped.
    assert!(envelope.contains("G?vaXhg6&lt;@V&apos;Y)-m"));

    let synthetic = format!(
        "<{tag}><Code>0</Code><Message>Approved</Message><TransactionId>12345</TransactionId></{tag}>",
        tag = operation.response_tag(),
    );
    let result = decode_response(operation, &synthetic).unwrap();

    assert!(result.is_success());
    assert_eq!(result.response_message, "Approved");
    assert_eq!(result.transaction_id.as_deref(), Some("12345"));
    assert!(result.token.is_none());
    assert!(result.payment_identifier.is_none());
}

#[test]
fn test_all_four_sale_routes_produce_matching_bodies_and_tags() {
    let combos = [
        (true, true, "MakePaymentReturnToken"),
        (true, false, "MakePayment"),
        (false, true, "MakeBlindPaymentReturnToken"),
        (false, false, "MakeBlindPayment"),
    ];

    for (hosted, multi_use, name) in combos {
        let mut request = BillPayRequest::new(TransactionIntent::Sale {
            bill_data_hosted: hosted,
            request_multi_use_token: multi_use,
        });
        request.amount = dec!(20);
        request.bills = vec![Bill::new("123", dec!(10)), Bill::new("321", dec!(10))];
        request.payment_method = Some(card());

        let operation = GatewayOperation::select(&request).unwrap();
        assert_eq!(operation.name(), name);

        let body = encode_request(operation, &request).unwrap();
        assert!(body.starts_with(&format!("<{name}>")), "body should open with {name}");

        let synthetic = format!(
            "<{tag}><Code>0</Code><Message>OK</Message><TransactionId>7</TransactionId></{tag}>",
            tag = operation.response_tag(),
        );
        let result = decode_response(operation, &synthetic).unwrap();
        assert_eq!(result.transaction_id.as_deref(), Some("7"));
    }
}

#[test]
fn test_bill_load_pipeline_with_full_bill_detail() {
    let customer = Customer {
        first_name: Some("Test".to_owned()),
        last_name: Some("Tester".to_owned()),
        email: Some("testemailaddress@e-hps.com".to_owned()),
        address: Some(Address {
            street_address1: Some("1234 Test St".to_owned()),
            city: Some("Auburn".to_owned()),
            state: Some("AL".to_owned()),
            postal_code: Some("12345".to_owned()),
            country: Some("US".to_owned()),
            ..Address::default()
        }),
        ..Customer::default()
    };

    let mut request = BillPayRequest::new(TransactionIntent::LoadBills);
    request.bills = (0..5)
        .map(|i| Bill {
            bill_type: Some("Tax Payments".to_owned()),
            identifier2: Some(format!("{i}")),
            due_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 10),
            presentment: Some(BillPresentment::Full),
            customer: Some(customer.clone()),
            ..Bill::new(format!("{i}"), dec!(50))
        })
        .collect();

    let operation = GatewayOperation::select(&request).unwrap();
    let body = encode_request(operation, &request).unwrap();

    assert_eq!(body.matches("<Bill>").count(), 5);
    assert_eq!(body.matches("<DueDate>2026-08-10</DueDate>").count(), 5);
    assert!(body.contains("<City>Auburn</City>"));

    let synthetic = "<LoadBillsResponse><Code>0</Code><Message>OK</Message></LoadBillsResponse>";
    assert!(decode_response(operation, synthetic).unwrap().is_success());
}

#[test]
fn test_hosted_payment_load_returns_identifier() {
    let mut request = BillPayRequest::new(TransactionIntent::LoadHostedPayment {
        payment_type: HostedPaymentType::MakePayment,
        customer_is_editable: false,
    });
    request.bills = vec![Bill {
        bill_type: Some("Tax Payments".to_owned()),
        due_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 8),
        presentment: Some(BillPresentment::Full),
        ..Bill::new("12345", dec!(50))
    }];
    request.customer = Some(Customer {
        first_name: Some("Test".to_owned()),
        email: Some("test@tester.com".to_owned()),
        ..Customer::default()
    });

    let operation = GatewayOperation::select(&request).unwrap();
    assert_eq!(operation, GatewayOperation::LoadSecurePay);

    let body = encode_request(operation, &request).unwrap();
    assert!(body.contains("<PaymentType>MakePayment</PaymentType>"));

    let synthetic = "<LoadSecurePayResponse><Code>0</Code><Message>OK</Message><PaymentIdentifier>secure-pay-77</PaymentIdentifier></LoadSecurePayResponse>";
    let result = decode_response(operation, synthetic).unwrap();
    assert_eq!(result.payment_identifier.as_deref(), Some("secure-pay-77"));
}

#[test]
fn test_customer_lifecycle_operations_encode_and_ack() {
    let id = uuid::Uuid::new_v4().to_string();
    let customer = Customer {
        id: Some(id.clone()),
        first_name: Some("IntegrationCreate".to_owned()),
        last_name: Some("Customer".to_owned()),
        email: Some("test.test@test.com".to_owned()),
        ..Customer::default()
    };

    for (intent, name) in [
        (TransactionIntent::CreateCustomer, "CreateCustomer"),
        (TransactionIntent::UpdateCustomer, "UpdateCustomer"),
        (TransactionIntent::DeleteCustomer, "DeleteCustomer"),
    ] {
        let mut request = BillPayRequest::new(intent);
        request.customer = Some(customer.clone());

        let operation = GatewayOperation::select(&request).unwrap();
        assert_eq!(operation.name(), name);

        let body = encode_request(operation, &request).unwrap();
        assert!(body.contains(&id));

        let synthetic = format!(
            "<{tag}><Code>0</Code><Message>OK</Message></{tag}>",
            tag = operation.response_tag(),
        );
        assert!(decode_response(operation, &synthetic).unwrap().is_success());
    }
}

#[test]
fn test_payment_method_create_returns_key() {
    let mut request = BillPayRequest::new(TransactionIntent::CreatePaymentMethod {
        account_name: uuid::Uuid::new_v4().to_string(),
    });
    request.customer = Some(Customer {
        id: Some(uuid::Uuid::new_v4().to_string()),
        ..Customer::default()
    });
    request.payment_method = Some(card());

    let operation = GatewayOperation::select(&request).unwrap();
    assert_eq!(operation, GatewayOperation::CreateCustomerAccount);

    encode_request(operation, &request).unwrap();

    let synthetic = "<CreateCustomerAccountResponse><Code>0</Code><Message>OK</Message><PaymentMethodKey>pm-1</PaymentMethodKey></CreateCustomerAccountResponse>";
    let result = decode_response(operation, synthetic).unwrap();
    assert_eq!(result.token.as_deref(), Some("pm-1"));
}

#[test]
fn test_gateway_rules_stay_opaque() {
    // Duplicate bills and unknown bill types are the gateway's business
    // rules; the client only relays whatever code it assigns.
    let operation = GatewayOperation::LoadBills;
    let synthetic =
        "<LoadBillsResponse><Code>215</Code><Message>Duplicate bill</Message></LoadBillsResponse>";

    let result = decode_response(operation, synthetic).unwrap();
    assert_eq!(result.response_code, "215");
    assert_eq!(result.response_message, "Duplicate bill");
    assert!(!result.is_success());
}
