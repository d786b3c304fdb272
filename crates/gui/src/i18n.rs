use std::sync::atomic::{AtomicU8, Ordering};

use crate::state::Language;

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Korean (default)

pub fn lang() -> Language {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Language::English,
        _ => Language::Korean,
    }
}

pub fn set_lang(l: Language) {
    CURRENT_LANG.store(
        match l {
            Language::Korean => 0,
            Language::English => 1,
        },
        Ordering::Relaxed,
    );
}

/// Label of a shape kind in the current language.
pub fn shape_name(kind: shared::ShapeKind) -> &'static str {
    use shared::ShapeKind;
    match kind {
        ShapeKind::Sphere => t("shape.sphere"),
        ShapeKind::Cube => t("shape.cube"),
        ShapeKind::Cone => t("shape.cone"),
        ShapeKind::Cylinder => t("shape.cylinder"),
        ShapeKind::Tetrahedron => t("shape.tetrahedron"),
        ShapeKind::Circle => t("shape.circle"),
    }
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ko = lang() == Language::Korean;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ko { "파일" } else { "File" },
        "menu.new" => if ko { "새 장면" } else { "New scene" },
        "menu.open" => if ko { "장면 열기..." } else { "Open Scene..." },
        "menu.open_title" => if ko { "장면 JSON 열기" } else { "Open Scene JSON" },
        "menu.save" => if ko { "장면 저장..." } else { "Save Scene..." },
        "menu.save_title" => if ko { "장면 JSON 저장" } else { "Save Scene JSON" },
        "menu.quit" => if ko { "종료" } else { "Quit" },

        "menu.view" => if ko { "보기" } else { "View" },
        "menu.controls" => if ko { "컨트롤 패널" } else { "Controls" },
        "menu.ai_chat" => if ko { "AI 채팅" } else { "AI Chat" },
        "menu.reset_camera" => if ko { "카메라 초기화" } else { "Reset camera" },
        "menu.language" => if ko { "언어" } else { "Language" },

        "menu.create" => if ko { "생성" } else { "Create" },
        "menu.settings" => if ko { "설정" } else { "Settings" },
        "menu.preferences" => if ko { "환경설정..." } else { "Preferences..." },

        // ── Shapes ──────────────────────────────────────────
        "shape.sphere" => if ko { "구" } else { "Sphere" },
        "shape.cube" => if ko { "정육면체" } else { "Cube" },
        "shape.cone" => if ko { "원뿔" } else { "Cone" },
        "shape.cylinder" => if ko { "원기둥" } else { "Cylinder" },
        "shape.tetrahedron" => if ko { "사면체" } else { "Tetrahedron" },
        "shape.circle" => if ko { "원" } else { "Circle" },
        "shape.custom" => if ko { "사용자 도형" } else { "Custom shape" },

        // ── Control panel ───────────────────────────────────
        "controls.shapes" => if ko { "도형" } else { "Shapes" },
        "controls.custom" => if ko { "꼭짓점으로 만들기" } else { "From vertices" },
        "controls.vertices_hint" => if ko { "[1,0,0], [0,1,0], [0,0,1], [0,0,0]" } else { "[1,0,0], [0,1,0], [0,0,1], [0,0,0]" },
        "controls.create_custom" => if ko { "도형 생성" } else { "Create shape" },
        "controls.plane" => if ko { "평면 (Ax + By + Cz + D = 0)" } else { "Plane (Ax + By + Cz + D = 0)" },
        "controls.plane_hint" => if ko { "A, B, C, D" } else { "A, B, C, D" },
        "controls.set_plane" => if ko { "평면 설정" } else { "Set plane" },
        "controls.rotate_shape" => if ko { "도형 회전" } else { "Rotate shape" },
        "controls.rotate_plane" => if ko { "평면 회전" } else { "Rotate plane" },
        "controls.angle" => if ko { "각도 (°)" } else { "Angle (°)" },
        "controls.mode" => if ko { "조작 모드" } else { "Control mode" },
        "controls.toggle_mode" => if ko { "모드 전환" } else { "Toggle mode" },
        "controls.clear" => if ko { "장면 지우기" } else { "Clear scene" },

        "plane.xy" => if ko { "XY 평면" } else { "XY plane" },
        "plane.xz" => if ko { "XZ 평면" } else { "XZ plane" },
        "plane.yz" => if ko { "YZ 평면" } else { "YZ plane" },

        "mode.orbit" => if ko { "카메라 회전 모드" } else { "Camera orbit mode" },
        "mode.drag" => if ko { "도형 이동 모드" } else { "Shape drag mode" },

        // ── Notice ──────────────────────────────────────────
        "notice.title" => if ko { "알림" } else { "Notice" },
        "notice.ok" => if ko { "확인" } else { "OK" },

        // ── Chat ────────────────────────────────────────────
        "chat.title" => if ko { "AI 채팅" } else { "AI Chat" },
        "chat.clear" => if ko { "지우기" } else { "Clear" },
        "chat.clear_tip" => if ko { "대화 기록 지우기" } else { "Clear chat history" },
        "chat.placeholder" => if ko { "도형에 대해 물어보세요." } else { "Ask about a shape." },
        "chat.examples" => if ko { "예시:" } else { "Examples:" },
        "chat.example1" => if ko { "원뿔 그려줘" } else { "Draw a cone" },
        "chat.example2" => if ko { "정육면체를 보여줘" } else { "Show me a cube" },
        "chat.example3" => if ko { "사면체의 부피는?" } else { "What is the volume of a tetrahedron?" },
        "chat.thinking" => if ko { "생각 중..." } else { "Thinking..." },
        "chat.ask" => if ko { "질문을 입력하세요..." } else { "Ask something..." },
        "chat.send_tip" => if ko { "보내기 (Enter)" } else { "Send (Enter)" },
        "chat.you" => if ko { "나" } else { "You" },
        "chat.retry" => if ko { "다시 시도" } else { "Retry" },
        "chat.will_draw" => if ko { "그릴 도형:" } else { "Will draw:" },

        // ── Status bar ──────────────────────────────────────
        "status.shape" => if ko { "도형" } else { "Shape" },
        "status.plane" => if ko { "평면" } else { "Plane" },
        "status.none" => if ko { "없음" } else { "none" },
        "status.ai_thinking" => if ko { "AI 응답 대기 중..." } else { "AI is thinking..." },
        "status.nav_hint" => if ko {
            "왼쪽 드래그: 회전 | 오른쪽 드래그: 이동 | 휠: 확대/축소"
        } else {
            "LMB drag: orbit | RMB drag: pan | Scroll: zoom"
        },
        "status.drag_hint" => if ko {
            "도형을 드래그해서 이동 | 가운데 드래그: 회전"
        } else {
            "Drag the shape to move it | MMB drag: orbit"
        },
        "status.projection" => if ko { "투영" } else { "Projection" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ko { "설정" } else { "Settings" },
        "settings.general" => if ko { "일반" } else { "General" },
        "settings.language" => if ko { "언어" } else { "Language" },
        "settings.grid" => if ko { "평면 격자" } else { "Plane grid" },
        "settings.grid_visible" => if ko { "격자 표시" } else { "Show grid" },
        "settings.grid_size" => if ko { "크기:" } else { "Size:" },
        "settings.grid_divisions" => if ko { "분할:" } else { "Divisions:" },
        "settings.grid_opacity" => if ko { "불투명도:" } else { "Opacity:" },
        "settings.axes" => if ko { "축" } else { "Axes" },
        "settings.axes_visible" => if ko { "축 표시" } else { "Show axes" },
        "settings.axes_labels" => if ko { "축 이름 표시" } else { "Show axis labels" },
        "settings.axes_length" => if ko { "길이:" } else { "Length:" },
        "settings.viewport" => if ko { "뷰포트" } else { "Viewport" },
        "settings.bg_color" => if ko { "배경색:" } else { "Background:" },
        "settings.proj_bg_color" => if ko { "투영 배경색:" } else { "Projection background:" },
        "settings.proj_size" => if ko { "투영 창 크기:" } else { "Projection size:" },
        "settings.ui" => if ko { "인터페이스" } else { "Interface" },
        "settings.font_size" => if ko { "글꼴 크기:" } else { "Font size:" },
        "settings.chat" => if ko { "AI 채팅" } else { "AI chat" },
        "settings.chat_model" => if ko { "모델:" } else { "Model:" },
        "settings.chat_base_url" => if ko { "API 주소:" } else { "API base URL:" },
        "settings.chat_api_key" => if ko { "API 키:" } else { "API key:" },
        "settings.chat_key_env" => if ko {
            "GEMINI_API_KEY 환경 변수가 있으면 우선 사용됩니다."
        } else {
            "The GEMINI_API_KEY environment variable takes precedence."
        },
        "settings.apply" => if ko { "저장" } else { "Save" },
        "settings.reset" => if ko { "기본값" } else { "Defaults" },
        "settings.close" => if ko { "닫기" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_language() {
        set_lang(Language::English);
        assert_eq!(t("shape.cube"), "Cube");
        set_lang(Language::Korean);
        assert_eq!(t("shape.cube"), "정육면체");
        assert_eq!(t("no.such.key"), "???");
    }
}
