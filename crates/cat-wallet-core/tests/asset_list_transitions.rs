use cat_wallet_core::{
    Account, AssetList, AssetListCommand, AssetListPhase, ChainType, CommitOutcome, PageRequest,
    PortError, Route, SupportedAssets, TokenBalance, TokenBalancePage, WalletContext,
};

fn context(address: &str) -> WalletContext {
    WalletContext {
        account: Account {
            address: address.to_owned(),
            alias: "Account 1".to_owned(),
        },
        ..WalletContext::default()
    }
}

fn balance(token_id: &str, amount: &str) -> TokenBalance {
    TokenBalance {
        token_id: token_id.to_owned(),
        name: format!("Token {token_id}"),
        symbol: token_id.to_uppercase(),
        amount: amount.to_owned(),
        decimals: 2,
    }
}

fn page(items: Vec<TokenBalance>, total: u64) -> TokenBalancePage {
    TokenBalancePage { items, total }
}

fn expect_fetch(command: AssetListCommand) -> cat_wallet_core::AssetFetch {
    match command {
        AssetListCommand::Fetch(fetch) => fetch,
        AssetListCommand::ShowEmpty => panic!("expected a fetch"),
    }
}

#[test]
fn mount_loads_first_page() {
    let mut list = AssetList::new(&context("bc1qalice"), PageRequest::default());
    assert_eq!(list.phase(), AssetListPhase::Loading);

    let fetch = expect_fetch(list.refresh());
    assert_eq!(fetch.address, "bc1qalice");
    assert_eq!(fetch.page, PageRequest::new(1, 100));

    let outcome = list.commit(fetch.ticket, Ok(page(vec![balance("cat", "100")], 1)));
    assert_eq!(outcome, CommitOutcome::Applied);
    assert_eq!(list.phase(), AssetListPhase::Ready);
    assert_eq!(list.tokens().len(), 1);
    assert_eq!(list.total(), Some(1));
}

#[test]
fn zero_total_is_empty() {
    let mut list = AssetList::new(&context("bc1qalice"), PageRequest::default());
    let fetch = expect_fetch(list.refresh());
    list.commit(fetch.ticket, Ok(page(vec![], 0)));
    assert_eq!(list.phase(), AssetListPhase::Empty);
}

#[test]
fn disabled_cat20_short_circuits_to_empty() {
    let mut ctx = context("bc1qalice");
    ctx.supported_assets = SupportedAssets {
        cat20: false,
        cat721: true,
    };
    let mut list = AssetList::new(&ctx, PageRequest::default());
    assert_eq!(list.refresh(), AssetListCommand::ShowEmpty);
    assert_eq!(list.phase(), AssetListPhase::Empty);
    assert!(list.tokens().is_empty());
}

#[test]
fn disabling_cat20_discards_in_flight_fetch() {
    let mut ctx = context("bc1qalice");
    let mut list = AssetList::new(&ctx, PageRequest::default());
    let fetch = expect_fetch(list.refresh());

    ctx.supported_assets.cat20 = false;
    assert_eq!(list.update_context(&ctx), Some(AssetListCommand::ShowEmpty));

    let outcome = list.commit(fetch.ticket, Ok(page(vec![balance("cat", "1")], 1)));
    assert_eq!(outcome, CommitOutcome::Stale);
    assert_eq!(list.phase(), AssetListPhase::Empty);
}

#[test]
fn stale_response_never_overwrites_newer_page() {
    let mut list = AssetList::new(&context("bc1qalice"), PageRequest::new(1, 2));
    let first = expect_fetch(list.refresh());
    let second = expect_fetch(list.set_pagination(PageRequest::new(2, 2)).expect("refetch"));

    let newer = list.commit(second.ticket, Ok(page(vec![balance("b", "2")], 3)));
    assert_eq!(newer, CommitOutcome::Applied);

    let older = list.commit(first.ticket, Ok(page(vec![balance("a", "1")], 3)));
    assert_eq!(older, CommitOutcome::Stale);
    assert_eq!(list.tokens()[0].token_id, "b");
}

#[test]
fn stale_failure_is_not_reported() {
    let mut list = AssetList::new(&context("bc1qalice"), PageRequest::default());
    let first = expect_fetch(list.refresh());
    let _second = expect_fetch(
        list.update_context(&context("bc1qbob"))
            .expect("account change refetches"),
    );
    let outcome = list.commit(
        first.ticket,
        Err(PortError::Transport("connection reset".to_owned())),
    );
    assert_eq!(outcome, CommitOutcome::Stale);
}

#[test]
fn failure_keeps_previous_page() {
    let mut list = AssetList::new(&context("bc1qalice"), PageRequest::new(1, 1));
    let fetch = expect_fetch(list.refresh());
    list.commit(fetch.ticket, Ok(page(vec![balance("a", "1")], 2)));

    let next = expect_fetch(list.go_to_page(2).expect("page change"));
    let outcome = list.commit(
        next.ticket,
        Err(PortError::Service {
            code: -1,
            message: "rate limited".to_owned(),
        }),
    );
    assert_eq!(outcome, CommitOutcome::Failed("rate limited".to_owned()));
    assert_eq!(list.phase(), AssetListPhase::Ready);
    assert_eq!(list.tokens()[0].token_id, "a");
    assert_eq!(list.pagination().page, 2);
}

#[test]
fn failure_before_first_page_stays_loading() {
    let mut list = AssetList::new(&context("bc1qalice"), PageRequest::default());
    let fetch = expect_fetch(list.refresh());
    let outcome = list.commit(fetch.ticket, Err(PortError::Transport("down".to_owned())));
    assert!(matches!(outcome, CommitOutcome::Failed(_)));
    assert_eq!(list.phase(), AssetListPhase::Loading);
}

#[test]
fn unchanged_inputs_do_not_refetch() {
    let ctx = context("bc1qalice");
    let mut list = AssetList::new(&ctx, PageRequest::default());
    list.refresh();
    assert_eq!(list.update_context(&ctx), None);
    assert_eq!(list.set_pagination(PageRequest::default()), None);
}

#[test]
fn chain_and_asset_setting_changes_refetch() {
    let mut ctx = context("bc1qalice");
    let mut list = AssetList::new(&ctx, PageRequest::default());
    list.refresh();

    ctx.chain = ChainType::FractalTestnet;
    assert!(matches!(
        list.update_context(&ctx),
        Some(AssetListCommand::Fetch(_))
    ));

    ctx.supported_assets.cat721 = false;
    assert!(matches!(
        list.update_context(&ctx),
        Some(AssetListCommand::Fetch(_))
    ));
}

#[test]
fn page_requests_are_clamped_to_known_range() {
    let mut list = AssetList::new(&context("bc1qalice"), PageRequest::new(1, 10));
    let fetch = expect_fetch(list.refresh());
    list.commit(fetch.ticket, Ok(page(vec![balance("a", "1")], 25)));
    assert_eq!(list.page_count(), 3);

    let fetch = expect_fetch(list.go_to_page(9).expect("clamped page"));
    assert_eq!(fetch.page.page, 3);
    assert_eq!(list.go_to_page(3), None);
}

#[test]
fn card_click_routes_to_token_screen() {
    let mut list = AssetList::new(&context("bc1qalice"), PageRequest::default());
    let fetch = expect_fetch(list.refresh());
    list.commit(fetch.ticket, Ok(page(vec![balance("cat", "100")], 1)));

    match list.token_route(0) {
        Some(Route::Cat20Token { token_id, balance }) => {
            assert_eq!(token_id, "cat");
            assert_eq!(balance.map(|b| b.amount), Some("100".to_owned()));
        }
        other => panic!("unexpected route {other:?}"),
    }
    assert_eq!(list.token_route(5), None);
}
