//! Keyboard and mouse button codes
//!
//! Keys and mouse buttons share one code space so button state can live in a
//! single flat array: mouse buttons occupy codes 0-7 and keyboard keys start
//! at 32, mirroring the native layer's numbering.

/// A keyboard key or mouse button
///
/// Discriminants are the native GLFW codes, so a `Button` doubles as an
/// index into per-frame state arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Button {
    /// First mouse button
    Mouse1 = 0,
    /// Second mouse button
    Mouse2 = 1,
    /// Third mouse button
    Mouse3 = 2,
    /// Fourth mouse button
    Mouse4 = 3,
    /// Fifth mouse button
    Mouse5 = 4,
    /// Sixth mouse button
    Mouse6 = 5,
    /// Seventh mouse button
    Mouse7 = 6,
    /// Eighth mouse button
    Mouse8 = 7,
    /// Space key
    Space = 32,
    /// Apostrophe key
    Apostrophe = 39,
    /// Comma key
    Comma = 44,
    /// Minus key
    Minus = 45,
    /// Period key
    Period = 46,
    /// Slash key
    Slash = 47,
    /// 0 key
    Num0 = 48,
    /// 1 key
    Num1 = 49,
    /// 2 key
    Num2 = 50,
    /// 3 key
    Num3 = 51,
    /// 4 key
    Num4 = 52,
    /// 5 key
    Num5 = 53,
    /// 6 key
    Num6 = 54,
    /// 7 key
    Num7 = 55,
    /// 8 key
    Num8 = 56,
    /// 9 key
    Num9 = 57,
    /// Semicolon key
    Semicolon = 59,
    /// Equal key
    Equal = 61,
    /// A key
    A = 65,
    /// B key
    B = 66,
    /// C key
    C = 67,
    /// D key
    D = 68,
    /// E key
    E = 69,
    /// F key
    F = 70,
    /// G key
    G = 71,
    /// H key
    H = 72,
    /// I key
    I = 73,
    /// J key
    J = 74,
    /// K key
    K = 75,
    /// L key
    L = 76,
    /// M key
    M = 77,
    /// N key
    N = 78,
    /// O key
    O = 79,
    /// P key
    P = 80,
    /// Q key
    Q = 81,
    /// R key
    R = 82,
    /// S key
    S = 83,
    /// T key
    T = 84,
    /// U key
    U = 85,
    /// V key
    V = 86,
    /// W key
    W = 87,
    /// X key
    X = 88,
    /// Y key
    Y = 89,
    /// Z key
    Z = 90,
    /// Left bracket key
    LeftBracket = 91,
    /// Backslash key
    Backslash = 92,
    /// Right bracket key
    RightBracket = 93,
    /// Grave accent key
    GraveAccent = 96,
    /// Non-US key #1
    World1 = 161,
    /// Non-US key #2
    World2 = 162,
    /// Escape key
    Escape = 256,
    /// Enter key
    Enter = 257,
    /// Tab key
    Tab = 258,
    /// Backspace key
    Backspace = 259,
    /// Insert key
    Insert = 260,
    /// Delete key
    Delete = 261,
    /// Right arrow key
    Right = 262,
    /// Left arrow key
    Left = 263,
    /// Down arrow key
    Down = 264,
    /// Up arrow key
    Up = 265,
    /// Page up key
    PageUp = 266,
    /// Page down key
    PageDown = 267,
    /// Home key
    Home = 268,
    /// End key
    End = 269,
    /// Caps lock key
    CapsLock = 280,
    /// Scroll lock key
    ScrollLock = 281,
    /// Num lock key
    NumLock = 282,
    /// Print screen key
    PrintScreen = 283,
    /// Pause key
    Pause = 284,
    /// F1 key
    F1 = 290,
    /// F2 key
    F2 = 291,
    /// F3 key
    F3 = 292,
    /// F4 key
    F4 = 293,
    /// F5 key
    F5 = 294,
    /// F6 key
    F6 = 295,
    /// F7 key
    F7 = 296,
    /// F8 key
    F8 = 297,
    /// F9 key
    F9 = 298,
    /// F10 key
    F10 = 299,
    /// F11 key
    F11 = 300,
    /// F12 key
    F12 = 301,
    /// F13 key
    F13 = 302,
    /// F14 key
    F14 = 303,
    /// F15 key
    F15 = 304,
    /// F16 key
    F16 = 305,
    /// F17 key
    F17 = 306,
    /// F18 key
    F18 = 307,
    /// F19 key
    F19 = 308,
    /// F20 key
    F20 = 309,
    /// F21 key
    F21 = 310,
    /// F22 key
    F22 = 311,
    /// F23 key
    F23 = 312,
    /// F24 key
    F24 = 313,
    /// F25 key
    F25 = 314,
    /// Keypad 0 key
    Kp0 = 320,
    /// Keypad 1 key
    Kp1 = 321,
    /// Keypad 2 key
    Kp2 = 322,
    /// Keypad 3 key
    Kp3 = 323,
    /// Keypad 4 key
    Kp4 = 324,
    /// Keypad 5 key
    Kp5 = 325,
    /// Keypad 6 key
    Kp6 = 326,
    /// Keypad 7 key
    Kp7 = 327,
    /// Keypad 8 key
    Kp8 = 328,
    /// Keypad 9 key
    Kp9 = 329,
    /// Keypad decimal key
    KpDecimal = 330,
    /// Keypad divide key
    KpDivide = 331,
    /// Keypad multiply key
    KpMultiply = 332,
    /// Keypad subtract key
    KpSubtract = 333,
    /// Keypad add key
    KpAdd = 334,
    /// Keypad enter key
    KpEnter = 335,
    /// Keypad equal key
    KpEqual = 336,
    /// Left shift key
    LeftShift = 340,
    /// Left control key
    LeftControl = 341,
    /// Left alt key
    LeftAlt = 342,
    /// Left super key
    LeftSuper = 343,
    /// Right shift key
    RightShift = 344,
    /// Right control key
    RightControl = 345,
    /// Right alt key
    RightAlt = 346,
    /// Right super key
    RightSuper = 347,
    /// Menu key
    Menu = 348,
}

impl Button {
    /// Size of the unioned key/mouse code space
    pub const COUNT: usize = 349;

    /// Left mouse button
    pub const MOUSE_LEFT: Self = Self::Mouse1;
    /// Right mouse button
    pub const MOUSE_RIGHT: Self = Self::Mouse2;
    /// Middle mouse button
    pub const MOUSE_MIDDLE: Self = Self::Mouse3;

    /// The button's native code, also its state-array index
    pub fn code(self) -> usize {
        self as usize
    }

    /// Map a native code back to a button
    ///
    /// Returns `None` for codes with no assigned button (including the
    /// native "unknown key" code -1), which callers drop.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Mouse1,
            1 => Self::Mouse2,
            2 => Self::Mouse3,
            3 => Self::Mouse4,
            4 => Self::Mouse5,
            5 => Self::Mouse6,
            6 => Self::Mouse7,
            7 => Self::Mouse8,
            32 => Self::Space,
            39 => Self::Apostrophe,
            44 => Self::Comma,
            45 => Self::Minus,
            46 => Self::Period,
            47 => Self::Slash,
            48 => Self::Num0,
            49 => Self::Num1,
            50 => Self::Num2,
            51 => Self::Num3,
            52 => Self::Num4,
            53 => Self::Num5,
            54 => Self::Num6,
            55 => Self::Num7,
            56 => Self::Num8,
            57 => Self::Num9,
            59 => Self::Semicolon,
            61 => Self::Equal,
            65 => Self::A,
            66 => Self::B,
            67 => Self::C,
            68 => Self::D,
            69 => Self::E,
            70 => Self::F,
            71 => Self::G,
            72 => Self::H,
            73 => Self::I,
            74 => Self::J,
            75 => Self::K,
            76 => Self::L,
            77 => Self::M,
            78 => Self::N,
            79 => Self::O,
            80 => Self::P,
            81 => Self::Q,
            82 => Self::R,
            83 => Self::S,
            84 => Self::T,
            85 => Self::U,
            86 => Self::V,
            87 => Self::W,
            88 => Self::X,
            89 => Self::Y,
            90 => Self::Z,
            91 => Self::LeftBracket,
            92 => Self::Backslash,
            93 => Self::RightBracket,
            96 => Self::GraveAccent,
            161 => Self::World1,
            162 => Self::World2,
            256 => Self::Escape,
            257 => Self::Enter,
            258 => Self::Tab,
            259 => Self::Backspace,
            260 => Self::Insert,
            261 => Self::Delete,
            262 => Self::Right,
            263 => Self::Left,
            264 => Self::Down,
            265 => Self::Up,
            266 => Self::PageUp,
            267 => Self::PageDown,
            268 => Self::Home,
            269 => Self::End,
            280 => Self::CapsLock,
            281 => Self::ScrollLock,
            282 => Self::NumLock,
            283 => Self::PrintScreen,
            284 => Self::Pause,
            290 => Self::F1,
            291 => Self::F2,
            292 => Self::F3,
            293 => Self::F4,
            294 => Self::F5,
            295 => Self::F6,
            296 => Self::F7,
            297 => Self::F8,
            298 => Self::F9,
            299 => Self::F10,
            300 => Self::F11,
            301 => Self::F12,
            302 => Self::F13,
            303 => Self::F14,
            304 => Self::F15,
            305 => Self::F16,
            306 => Self::F17,
            307 => Self::F18,
            308 => Self::F19,
            309 => Self::F20,
            310 => Self::F21,
            311 => Self::F22,
            312 => Self::F23,
            313 => Self::F24,
            314 => Self::F25,
            320 => Self::Kp0,
            321 => Self::Kp1,
            322 => Self::Kp2,
            323 => Self::Kp3,
            324 => Self::Kp4,
            325 => Self::Kp5,
            326 => Self::Kp6,
            327 => Self::Kp7,
            328 => Self::Kp8,
            329 => Self::Kp9,
            330 => Self::KpDecimal,
            331 => Self::KpDivide,
            332 => Self::KpMultiply,
            333 => Self::KpSubtract,
            334 => Self::KpAdd,
            335 => Self::KpEnter,
            336 => Self::KpEqual,
            340 => Self::LeftShift,
            341 => Self::LeftControl,
            342 => Self::LeftAlt,
            343 => Self::LeftSuper,
            344 => Self::RightShift,
            345 => Self::RightControl,
            346 => Self::RightAlt,
            347 => Self::RightSuper,
            348 => Self::Menu,
            _ => return None,
        })
    }
}
