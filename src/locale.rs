// Language collaborator - string lookup and direction
//
// Pages consume this as an opaque context: `t(key)` returns a display
// string synchronously, `is_rtl()` flips alignment for Arabic. Keys that
// have no entry fall through to the key itself so a missing translation
// never blanks the UI.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub fn from_code(code: &str) -> Lang {
        match code {
            "ar" => Lang::Ar,
            _ => Lang::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    pub fn toggle(self) -> Lang {
        match self {
            Lang::En => Lang::Ar,
            Lang::Ar => Lang::En,
        }
    }
}

/// Read-only language context injected into every page render
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub lang: Lang,
}

impl Locale {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn is_rtl(&self) -> bool {
        self.lang == Lang::Ar
    }

    /// Look up a display string; unknown keys return the key itself
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match entry(key) {
            Some((en, ar)) => match self.lang {
                Lang::En => en,
                Lang::Ar => ar,
            },
            None => key,
        }
    }
}

/// (english, arabic) pairs for every known key
fn entry(key: &str) -> Option<(&'static str, &'static str)> {
    let pair = match key {
        // Page titles
        "page.home" => ("Home", "الرئيسية"),
        "page.services" => ("Services", "الخدمات"),
        "page.projects" => ("Projects", "المشاريع"),
        "page.freelancers" => ("Freelancers", "المستقلون"),
        "page.blog" => ("Blog", "المدونة"),
        "page.messages" => ("Messages", "الرسائل"),
        "page.dashboard" => ("Dashboard", "لوحة التحكم"),
        "page.wallet" => ("Wallet", "المحفظة"),
        "page.login" => ("Sign In", "تسجيل الدخول"),
        "page.register" => ("Create Account", "إنشاء حساب"),
        "page.about" => ("About", "من نحن"),
        "page.support" => ("Support", "الدعم"),
        "page.terms" => ("Terms of Service", "شروط الخدمة"),
        "page.privacy" => ("Privacy Policy", "سياسة الخصوصية"),
        "page.not_found" => ("Page Not Found", "الصفحة غير موجودة"),

        // Shared listing chrome
        "common.search" => ("Search", "بحث"),
        "common.category" => ("Category", "الفئة"),
        "common.all_categories" => ("All Categories", "كل الفئات"),
        "common.tag" => ("Tag", "وسم"),
        "common.sort" => ("Sort", "ترتيب"),
        "common.min_rating" => ("Min rating", "أدنى تقييم"),
        "common.results" => ("results", "نتيجة"),
        "common.clear_filters" => ("clear filters", "مسح عوامل التصفية"),
        "common.hours" => ("hours", "ساعات"),
        "common.per_hour" => ("h/hr", "س/ساعة"),
        "common.reviews" => ("reviews", "تقييم"),
        "common.member_since" => ("Member since", "عضو منذ"),
        "sort.rating" => ("Rating", "التقييم"),
        "sort.newest" => ("Newest", "الأحدث"),
        "sort.price" => ("Price", "السعر"),

        // Services
        "services.subtitle" => (
            "Exchange your time for the skills you need",
            "بادل وقتك بالمهارات التي تحتاجها",
        ),
        "services.empty" => ("No services found", "لم يتم العثور على خدمات"),
        "services.book" => ("Request booking", "طلب حجز"),
        "services.login_to_book" => ("Sign in to book", "سجّل الدخول للحجز"),

        // Projects
        "projects.subtitle" => (
            "Find exciting projects to work on and earn time credits",
            "اعثر على مشاريع مميزة واكسب أرصدة وقت",
        ),
        "projects.empty" => ("No projects found", "لم يتم العثور على مشاريع"),
        "projects.apply" => ("Submit proposal", "تقديم عرض"),
        "projects.login_to_apply" => ("Sign in to apply", "سجّل الدخول للتقديم"),
        "projects.budget" => ("Budget", "الميزانية"),
        "projects.deadline" => ("Deadline", "الموعد النهائي"),

        // Freelancers
        "freelancers.subtitle" => (
            "Meet the members behind the hours",
            "تعرّف على الأعضاء وراء الساعات",
        ),
        "freelancers.empty" => ("No freelancers found", "لم يتم العثور على مستقلين"),
        "freelancers.completed" => ("completed", "مكتملة"),
        "freelancers.responds" => ("responds", "يرد"),

        // Blog
        "blog.subtitle" => (
            "Stories and advice from the community",
            "قصص ونصائح من المجتمع",
        ),
        "blog.empty" => ("No articles found", "لم يتم العثور على مقالات"),
        "blog.min_read" => ("min read", "دقيقة قراءة"),

        // Messages
        "messages.empty" => ("No conversations yet", "لا توجد محادثات بعد"),
        "messages.compose" => ("Type a message", "اكتب رسالة"),
        "messages.sent" => ("Message sent", "تم إرسال الرسالة"),

        // Home
        "home.tagline" => (
            "Trade hours, not money",
            "بادل الساعات، لا المال",
        ),
        "home.featured" => ("Featured services", "خدمات مميزة"),
        "home.latest_posts" => ("Latest from the blog", "الأحدث من المدونة"),
        "home.open_projects" => ("Open projects", "مشاريع مفتوحة"),

        // Dashboard and wallet
        "dashboard.notifications" => ("Notifications", "الإشعارات"),
        "dashboard.activity" => ("Recent activity", "النشاط الأخير"),
        "wallet.balance" => ("Balance", "الرصيد"),
        "wallet.history" => ("Transaction history", "سجل المعاملات"),

        // Forms
        "form.name" => ("Name", "الاسم"),
        "form.email" => ("Email", "البريد الإلكتروني"),
        "form.password" => ("Password", "كلمة المرور"),
        "form.message" => ("Message", "الرسالة"),
        "form.submit" => ("Submit", "إرسال"),
        "login.invalid" => ("Invalid email or password", "بريد إلكتروني أو كلمة مرور غير صحيحة"),
        "login.missing" => ("Email and password are required", "البريد وكلمة المرور مطلوبان"),
        "login.signed_in" => ("Signed in", "تم تسجيل الدخول"),
        "login.signed_out" => ("Signed out", "تم تسجيل الخروج"),
        "register.done" => ("Account created, welcome!", "تم إنشاء الحساب، أهلاً بك!"),
        "register.invalid" => (
            "A name, a valid email and a password of 4+ characters are required",
            "مطلوب اسم وبريد إلكتروني صحيح وكلمة مرور من 4 أحرف على الأقل",
        ),
        "support.sending" => ("Sending…", "جارٍ الإرسال…"),
        "support.sent" => ("Message sent. We will get back to you.", "تم الإرسال. سنعاود التواصل معك."),
        "support.invalid" => (
            "A valid email and a message are required",
            "مطلوب بريد إلكتروني صحيح ورسالة",
        ),

        // Not found
        "not_found.body" => (
            "The page you are looking for does not exist.",
            "الصفحة التي تبحث عنها غير موجودة.",
        ),

        _ => return None,
    };
    Some(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_translates_per_language() {
        let en = Locale::new(Lang::En);
        let ar = Locale::new(Lang::Ar);
        assert_eq!(en.t("page.services"), "Services");
        assert_eq!(ar.t("page.services"), "الخدمات");
    }

    #[test]
    fn unknown_key_falls_through_to_itself() {
        let locale = Locale::new(Lang::En);
        assert_eq!(locale.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn direction_follows_language() {
        assert!(!Locale::new(Lang::En).is_rtl());
        assert!(Locale::new(Lang::Ar).is_rtl());
    }

    #[test]
    fn lang_code_round_trip() {
        assert_eq!(Lang::from_code("ar"), Lang::Ar);
        assert_eq!(Lang::from_code("en"), Lang::En);
        // Unknown codes default to English
        assert_eq!(Lang::from_code("fr"), Lang::En);
        assert_eq!(Lang::Ar.code(), "ar");
        assert_eq!(Lang::En.toggle(), Lang::Ar);
    }
}
