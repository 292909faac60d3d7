use gigboard_model::{
    bid::BidStatus,
    leaderboard::Snapshot,
    rust_decimal::Decimal,
    BidLedger, BudgetRange, CreatorProfile, CreatorStats, Direction, Leaderboard, Opportunity,
    Outcome, RankingType, TimeWindow,
};
use rust_decimal_macros::dec;

fn catalog() -> Vec<Opportunity> {
    [
        ("gig-1", "Holiday Gift Guide", "Parcel & Co", dec!(1000), dec!(3000)),
        ("gig-2", "Protein Bar Unboxing", "FuelUp", dec!(400), dec!(900)),
        ("gig-3", "Travel Vlog Sponsorship", "Wayfare", dec!(5000), dec!(12000)),
    ]
    .into_iter()
    .map(|(id, title, brand, min, max)| Opportunity {
        id: id.to_string(),
        title: title.to_string(),
        brand: brand.to_string(),
        brand_logo: String::new(),
        category: "Lifestyle".to_string(),
        budget: BudgetRange::new(min, max),
        time_left: "4 days".to_string(),
        requirements: Vec::new(),
    })
    .collect()
}

#[test]
fn bid_lifecycle() -> eyre::Result<()> {
    let gigs = catalog();
    let mut ledger = BidLedger::default();

    let mut ids = Vec::new();
    for (gig, amount) in gigs.iter().zip([dec!(1200), dec!(450), dec!(6000)]) {
        let draft = gig.draft_bid(amount, "Audience is 70% US, 25-34.")?;
        let bid = ledger.add_bid(draft)?;
        assert_eq!(bid.status, BidStatus::Active);
        ids.push(bid.id);
    }
    assert_eq!(ledger.len(), 3);

    // A competitor outbids the first bid, then we take the lead back.
    ledger.mark_outbid(ids[0], dec!(1500))?;
    assert_eq!(ledger.get_bid("gig-1").map(|b| b.status), Some(BidStatus::Outbid));
    let err = ledger.update_bid(ids[0], dec!(1100)).unwrap_err();
    assert_eq!(err.code(), "BID_AMOUNT_NOT_INCREASED");
    assert_eq!(ledger.update_bid(ids[0], dec!(1500))?.status, BidStatus::Active);
    assert_eq!(ledger.update_bid(ids[0], dec!(1600))?.status, BidStatus::Leading);

    // The second gig resolves; the bid is frozen afterwards.
    ledger.resolve_bid(ids[1], Outcome::Won)?;
    assert!(ledger.update_bid(ids[1], dec!(500)).is_err());

    // Withdraw the third one twice.
    assert!(ledger.withdraw_bid(ids[2]).is_some());
    assert!(ledger.withdraw_bid(ids[2]).is_none());
    assert!(ledger.get_bid("gig-3").is_none());

    let summary = ledger.summary();
    assert_eq!(summary.leading, 1);
    assert_eq!(summary.won, 1);
    assert_eq!(summary.committed, dec!(1600));
    Ok(())
}

#[test]
fn caller_validation_runs_before_the_ledger() {
    let gigs = catalog();
    let err = gigs[2].draft_bid(dec!(4999), "pitch").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.code(), "BID_AMOUNT_BELOW_MINIMUM");
    assert_eq!(
        err.to_string(),
        "bid amount 4999 is below the minimum budget of 5000"
    );
}

#[test]
fn ledger_survives_a_json_round_trip() -> eyre::Result<()> {
    let mut ledger = BidLedger::default();
    let id = ledger.add_bid(catalog()[0].draft_bid(dec!(1200), "pitch")?)?.id;
    ledger.mark_outbid(id, dec!(1300))?;

    let json = serde_json::to_string(ledger.bids())?;
    let bids = serde_json::from_str(&json)?;
    let restored = BidLedger::from_parts(bids, ledger.next_id())?;

    assert_eq!(restored.bids(), ledger.bids());
    assert_eq!(restored.next_id(), ledger.next_id());
    Ok(())
}

fn creators() -> Vec<CreatorProfile> {
    [
        ("maya", dec!(150000), 7, dec!(92), Some(dec!(8))),
        ("leo", dec!(520000), 21, dec!(88), Some(dec!(3))),
        ("ivy", dec!(24999), 2, dec!(97), Some(dec!(41))),
        ("sam", dec!(5000), 12, dec!(75), None),
    ]
    .into_iter()
    .map(|(id, earnings, streak, repeat, growth)| {
        CreatorProfile::builder()
            .id(id)
            .name(id)
            .stats(CreatorStats {
                lifetime_earnings: earnings,
                current_streak: streak,
                repeat_brand_rate: repeat,
                monthly_growth: growth,
                ..Default::default()
            })
            .build()
    })
    .collect()
}

#[test]
fn leaderboards_by_type_and_window() -> eyre::Result<()> {
    let mut board = Leaderboard::new(creators())?;

    let earners = board.get_leaderboard(RankingType::Earners, TimeWindow::All);
    let order = earners
        .iter()
        .map(|e| (e.creator_id.as_str(), e.rank, e.tier.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        order,
        [
            ("leo", 1, "legend"),
            ("maya", 2, "elite"),
            ("ivy", 3, "rising"),
            ("sam", 4, "rising"),
        ]
    );
    assert_eq!(
        RankingType::Earners.format_value(&earners[1].stats),
        "$150.0K"
    );

    // Last week's board had ivy on top of the growth ranking and leo last.
    board.insert_snapshot(Snapshot {
        kind: RankingType::Rising,
        window: TimeWindow::Week,
        ranks: [("ivy", 1), ("maya", 2), ("sam", 3), ("leo", 4)]
            .into_iter()
            .map(|(id, rank)| (id.to_string(), rank))
            .collect(),
    });
    let rising = board.get_leaderboard(RankingType::Rising, TimeWindow::Week);
    let moves = rising
        .iter()
        .map(|e| (e.creator_id.as_str(), e.position_change().direction))
        .collect::<Vec<_>>();
    assert_eq!(
        moves,
        [
            ("ivy", Direction::Same),
            ("maya", Direction::Same),
            ("leo", Direction::Up),
            ("sam", Direction::Down),
        ]
    );
    Ok(())
}

#[test]
fn sort_key_ignores_scale() {
    let stats = CreatorStats {
        repeat_brand_rate: Decimal::new(8500, 2),
        ..Default::default()
    };
    assert_eq!(RankingType::Rating.sort_key(&stats), dec!(85));
    assert_eq!(RankingType::Rating.format_value(&stats), "❤️ 85%");
}
