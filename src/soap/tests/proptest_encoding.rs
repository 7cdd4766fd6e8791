use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::config::BillPayConfig;
use crate::model::{
    AccountType, AchAccount, BillPayRequest, CardData, PaymentMethod, CheckType, SecCode,
    TransactionIntent,
};
use crate::soap::envelope::build_envelope;
use crate::soap::operations::GatewayOperation;
use crate::soap::{format_amount, format_date};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_amount_formatting_is_always_two_decimals(cents in 0i64..1_000_000_000) {
        let amount = Decimal::new(cents, 2);
        let formatted = format_amount(amount);

        let expected = format!("{}.{:02}", cents / 100, cents % 100);
        prop_assert_eq!(&formatted, &expected);

        let (dollars, fraction) = formatted.split_once('.').expect("missing decimal point");
        prop_assert!(!dollars.is_empty());
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(fraction.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_date_formatting_is_iso(y in 2000i32..2100, m in 1u32..=12, d in 1u32..=28) {
        let date = chrono::NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
        prop_assert_eq!(format_date(date), format!("{y:04}-{m:02}-{d:02}"));
    }

    #[test]
    fn test_sale_routing_is_total_and_injective(
        hosted_a in any::<bool>(),
        multi_a in any::<bool>(),
        hosted_b in any::<bool>(),
        multi_b in any::<bool>(),
    ) {
        let route = |hosted, multi_use| {
            let request = BillPayRequest::new(TransactionIntent::Sale {
                bill_data_hosted: hosted,
                request_multi_use_token: multi_use,
            });
            GatewayOperation::select(&request).expect("sale always routes")
        };

        let a = route(hosted_a, multi_a);
        let b = route(hosted_b, multi_b);

        // Same flags, same operation; different flags, different operation.
        prop_assert_eq!((hosted_a, multi_a) == (hosted_b, multi_b), a == b);
    }

    #[test]
    fn test_verify_without_token_request_never_routes(kind in 0u8..3) {
        let method = match kind {
            0 => Some(PaymentMethod::Card(CardData {
                number: "4444444444444448".to_owned(),
                expiration_month: 12,
                expiration_year: 2027,
                security_code: None,
                card_holder_name: None,
            })),
            1 => Some(PaymentMethod::Ach(AchAccount {
                account_number: "12345".to_owned(),
                routing_number: "064000017".to_owned(),
                account_type: AccountType::Checking,
                check_type: CheckType::Personal,
                sec_code: SecCode::Ppd,
                check_holder_name: None,
                bank_name: None,
            })),
            _ => None,
        };

        let mut request =
            BillPayRequest::new(TransactionIntent::Verify { request_multi_use_token: false });
        request.payment_method = method;

        prop_assert!(GatewayOperation::select(&request).is_err());
    }

    #[test]
    fn test_envelope_never_leaks_raw_markup_from_credentials(
        merchant in "[ -~]{1,32}",
        username in "[ -~]{1,32}",
        password in "[ -~]{1,32}",
    ) {
        let config = BillPayConfig::new(
            merchant,
            username,
            password,
            "https://billpay.example.com/gw",
        );
        let envelope = build_envelope(&config.credentials(), "<GetToken/>");

        let header_start = envelope.find("<soapenv:Header>").expect("header present");
        let header_end = envelope.find("</soapenv:Header>").expect("header closed");
        let header = &envelope[header_start + "<soapenv:Header>".len()..header_end];

        // Inside the header only the six fixed credential tags may open or
        // close; escaped credential text contributes none of its own.
        let tag_count = header.matches('<').count();
        prop_assert_eq!(tag_count, 6);
    }
}
