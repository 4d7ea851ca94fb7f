//! 渲染（build_lines）测试

mod common;

use common::{line_text, loaded_canned_app, nav, node_names, single_group_app, texts};
use proxy_controller_client::{canned_proxies, DelayHistory, Proxy, ProxyError, ProxyKind};
use proxy_controller_tui::i18n::Language;
use proxy_controller_tui::message::{AppMessage, BackendMessage, NavigationMessage};
use proxy_controller_tui::model::App;
use proxy_controller_tui::update::update;
use proxy_controller_tui::view::{build_lines, render, Theme, ViewContext};
use ratatui::{backend::TestBackend, Terminal};

fn lines_of(app: &App) -> Vec<String> {
    texts(&build_lines(app, &ViewContext::default()))
}

#[test]
fn default_layout_fills_the_terminal() {
    let app = loaded_canned_app();

    let lines = lines_of(&app);

    assert_eq!(lines.len(), 24);
    assert_eq!(lines[0], "   Proxy   ");
    assert_eq!(lines[1], ">> Proxy-1");
    assert_eq!(lines[2], "   Proxy-2");
    assert_eq!(lines[3], "   Proxy-3");
    assert_eq!(lines[22], "   Auto    ");
    assert!(lines[23].ends_with("[q]Quit"), "{}", lines[23]);
}

#[test]
fn height_15_keeps_group_order_and_help_last() {
    let mut app = loaded_canned_app();
    update(
        &mut app,
        AppMessage::Resize {
            width: 80,
            height: 15,
        },
    );

    let lines = lines_of(&app);

    assert_eq!(lines.len(), 15);
    let proxy = lines.iter().position(|l| l.trim() == "Proxy");
    let auto = lines.iter().position(|l| l.trim() == "Auto");
    assert!(proxy < auto, "Proxy must come before Auto: {lines:?}");
    assert_eq!(auto, Some(13));
    assert!(lines[14].contains("[q]Quit"));
}

#[test]
fn height_8_single_group_is_exactly_8_lines_with_compact_help() {
    let app = single_group_app(&["Proxy-1", "Proxy-2"], 8);

    let lines = lines_of(&app);

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[1], ">> Proxy-1");
    assert!(lines[7].contains("q:quit"), "{}", lines[7]);
    assert!(!lines[7].contains("[q]Quit"));
}

#[test]
fn markers_track_cursor_and_active_member() {
    let mut app = loaded_canned_app();
    nav(&mut app, NavigationMessage::CursorDown);

    let lines = lines_of(&app);

    assert_eq!(lines[1], " > Proxy-1");
    assert_eq!(lines[2], ">  Proxy-2");
}

#[test]
fn reload_prefers_fresh_history_over_old_measurement() {
    let mut app = loaded_canned_app();
    update(
        &mut app,
        AppMessage::Backend(BackendMessage::DelayMeasured {
            member: "Proxy-2".into(),
            result: Ok(80),
        }),
    );
    assert_eq!(lines_of(&app)[2], "   Proxy-2  80ms");

    // 控制器此后记录了更新的一次测速
    let mut proxies = canned_proxies();
    let mut node = Proxy::group("Proxy-2", ProxyKind::Other("Shadowsocks".into()), "", &[]);
    node.history.push(DelayHistory {
        time: "2026-10-19T08:00:00Z".into(),
        delay: 950,
    });
    proxies.insert("Proxy-2".into(), node);
    update(&mut app, AppMessage::Reload);
    update(
        &mut app,
        AppMessage::Backend(BackendMessage::ProxiesLoaded {
            groups: vec!["Proxy".into(), "Auto".into()],
            proxies,
        }),
    );

    assert_eq!(lines_of(&app)[2], "   Proxy-2  950ms");
}

#[test]
fn current_group_members_follow_their_header() {
    let mut app = loaded_canned_app();
    nav(&mut app, NavigationMessage::GroupNext);

    let lines = lines_of(&app);

    assert_eq!(lines[0].trim(), "Proxy");
    assert_eq!(lines[1].trim(), "Auto");
    assert_eq!(lines[2], "   Auto-1");
    assert_eq!(lines[3], ">> Auto-2");
    assert!(lines[23].ends_with("[q]Quit"));
}

#[test]
fn scrolled_list_shows_position() {
    let names = node_names(30);
    let members: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut app = single_group_app(&members, 10);
    for _ in 0..12 {
        nav(&mut app, NavigationMessage::CursorDown);
    }

    let lines = lines_of(&app);

    assert_eq!(lines.len(), 10);
    let cursor_row = lines
        .iter()
        .find(|l| l.starts_with(">  "))
        .cloned()
        .unwrap_or_default();
    assert_eq!(cursor_row, ">  Node-13 (13/30)");
    // 视口内只有 7 个成员
    assert_eq!(lines.iter().filter(|l| l.contains("Node-")).count(), 7);
}

#[test]
fn never_exceeds_terminal_height() {
    let names = node_names(40);
    let members: Vec<&str> = names.iter().map(String::as_str).collect();

    for height in 0..=30u16 {
        for app in [loaded_canned_app(), single_group_app(&members, 24)] {
            let mut app = app;
            update(&mut app, AppMessage::Resize { width: 80, height });
            for _ in 0..5 {
                nav(&mut app, NavigationMessage::CursorDown);
            }

            let lines = build_lines(&app, &ViewContext::default());

            assert!(
                lines.len() <= usize::from(height),
                "height {height}: {} lines",
                lines.len()
            );
        }
    }
}

#[test]
fn tiny_terminal_keeps_cursor_row_and_help() {
    let mut app = loaded_canned_app();
    nav(&mut app, NavigationMessage::GroupNext);
    nav(&mut app, NavigationMessage::CursorDown);
    update(
        &mut app,
        AppMessage::Resize {
            width: 80,
            height: 3,
        },
    );

    let lines = lines_of(&app);

    assert_eq!(lines.len(), 3);
    assert!(lines.iter().any(|l| l.starts_with(">  Auto-3")), "{lines:?}");
    assert!(lines[2].contains("q:quit"));
}

#[test]
fn loading_banner() {
    let app = App::new();

    let lines = lines_of(&app);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('═'));
    assert_eq!(lines[1], "  Loading proxies...");
}

#[test]
fn error_banner_shows_message_and_hint() {
    let mut app = loaded_canned_app();
    app.last_error = Some(ProxyError::Protocol {
        status: 401,
        body: "Unauthorized".into(),
    });

    let lines = lines_of(&app);

    assert_eq!(lines[1], "  Error");
    assert!(lines[2].contains("401"), "{}", lines[2]);
    assert!(lines[2].contains("Unauthorized"), "{}", lines[2]);
    assert_eq!(lines[3], "  Press [r] retry, [q] quit");
}

#[test]
fn empty_banner_without_groups() {
    let app = App::with_data(Vec::new(), Default::default());

    let lines = lines_of(&app);

    assert_eq!(lines[1], "  No proxy groups found");
    assert_eq!(lines[2], "  Press [r] refresh, [q] quit");
}

#[test]
fn banners_respect_height() {
    let mut app = App::new();
    app.last_error = Some(ProxyError::Decode {
        detail: "expected value".into(),
    });
    app.loading = false;
    app.terminal_height = 2;

    assert_eq!(lines_of(&app).len(), 2);
}

#[test]
fn chinese_texts() {
    let app = loaded_canned_app();
    let ctx = ViewContext::new(Theme::Light, Language::ZhCn);

    let lines = build_lines(&app, &ctx);

    let help = lines.last().map(line_text).unwrap_or_default();
    assert!(help.contains("[q]退出"), "{help}");
}

#[test]
fn rendering_is_deterministic() {
    let app = loaded_canned_app();
    assert_eq!(lines_of(&app), lines_of(&app));
}

#[test]
fn draws_into_test_backend() {
    let mut app = single_group_app(&["Proxy-1", "Proxy-2"], 8);
    app.terminal_width = 60;
    let ctx = ViewContext::default();
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).expect("test terminal");

    terminal
        .draw(|frame| render(&app, &ctx, frame))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    let row = |y: u16| -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect::<String>()
    };
    assert!(row(1).starts_with(">> Proxy-1"));
    assert!(row(7).contains("q:quit"), "{}", row(7));
}
