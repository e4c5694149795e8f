use flatstay_booking::BookingStatus;
use flatstay_catalog::seed_catalog;
use flatstay_reserve::{BookingRequest, ReservationError, ReservationService, SearchRequest};

fn search_request(check_in: &str, check_out: &str, guests: u32) -> SearchRequest {
    SearchRequest {
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
        guests,
        apartment_id: None,
        flat_type_id: None,
    }
}

#[test]
fn test_search_book_cancel_flow() {
    let mut service = ReservationService::new(seed_catalog());

    // 1. Search for a family stay in Garden View Residences
    let mut request = search_request("2099-06-01", "2099-06-08", 4);
    request.apartment_id = Some(2);
    let results = service.search(&request).unwrap();

    // Only the four 2 Bedroom flats sleep 4 or more there
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.flat_type.id == 3));
    let chosen = &results[0];

    // 2. Confirm the first result
    let booking = service
        .confirm(&BookingRequest {
            flat_id: chosen.flat.id,
            guest_name: "Nadia Torres".to_string(),
            guest_email: "nadia@example.com".to_string(),
            guest_phone: "+34 600 000 111".to_string(),
            check_in: "2099-06-01".to_string(),
            check_out: "2099-06-08".to_string(),
            total_guests: 4,
            special_requests: "Ground floor if possible".to_string(),
        })
        .unwrap();

    assert_eq!(booking.id, 1);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    // 7 nights at 28000 cents
    assert_eq!(booking.total_price_cents, 196_000);

    // 3. The booked flat disappears from an overlapping search
    let results = service.search(&request).unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.flat.id != chosen.flat.id));

    // 4. Confirmation page view joins the catalog entities
    let details = service.booking_details(booking.id).unwrap();
    assert_eq!(details.apartment.name, "Garden View Residences");
    assert_eq!(details.flat_type.name, "2 Bedroom");
    assert_eq!(details.booking.special_requests, "Ground floor if possible");

    // 5. A second guest cannot double-book the same flat
    let err = service
        .confirm(&BookingRequest {
            flat_id: chosen.flat.id,
            guest_name: "Omar Haddad".to_string(),
            guest_email: "omar@example.com".to_string(),
            guest_phone: "+971 50 000 2222".to_string(),
            check_in: "2099-06-05".to_string(),
            check_out: "2099-06-10".to_string(),
            total_guests: 2,
            special_requests: String::new(),
        })
        .unwrap_err();
    assert!(matches!(err, ReservationError::Unavailable { .. }));
    assert_eq!(service.ledger().len(), 1);

    // 6. Manage by email, then cancel
    let mine = service.guest_bookings("nadia@example.com");
    assert_eq!(mine.len(), 1);

    assert!(service.cancel(booking.id));
    assert!(service.guest_bookings("nadia@example.com").is_empty());
    assert_eq!(
        service.ledger().booking(booking.id).unwrap().status,
        BookingStatus::Cancelled
    );

    // 7. Cancellation frees the dates again
    let results = service.search(&request).unwrap();
    assert_eq!(results.len(), 4);

    // 8. Ids stay monotonic after the cancellation
    let rebooked = service
        .confirm(&BookingRequest {
            flat_id: chosen.flat.id,
            guest_name: "Omar Haddad".to_string(),
            guest_email: "omar@example.com".to_string(),
            guest_phone: "+971 50 000 2222".to_string(),
            check_in: "2099-06-05".to_string(),
            check_out: "2099-06-10".to_string(),
            total_guests: 2,
            special_requests: String::new(),
        })
        .unwrap();
    assert_eq!(rebooked.id, 2);
}

#[test]
fn test_back_to_back_stays_share_a_boundary_day() {
    let mut service = ReservationService::new(seed_catalog());

    let book = |service: &mut ReservationService, check_in: &str, check_out: &str| {
        service.confirm(&BookingRequest {
            flat_id: 10,
            guest_name: "Lena Fischer".to_string(),
            guest_email: "lena@example.com".to_string(),
            guest_phone: "+49 30 000000".to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            total_guests: 2,
            special_requests: String::new(),
        })
    };

    book(&mut service, "2099-03-01", "2099-03-05").unwrap();
    // New check-in on the checkout day succeeds
    book(&mut service, "2099-03-05", "2099-03-09").unwrap();
    // But any real overlap is refused
    assert!(matches!(
        book(&mut service, "2099-03-04", "2099-03-06"),
        Err(ReservationError::Unavailable { .. })
    ));
}
