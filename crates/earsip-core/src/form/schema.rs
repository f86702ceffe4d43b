//! Field schemas for every form in the client.

use crate::policy::DISPOSITION_ACTIONS;

/// Input widget and value shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    Multiline,
    /// Masked text, never trimmed.
    Password,
    /// `YYYY-MM-DD`.
    Date,
    /// E-mail address.
    Email,
    /// One of a fixed set of values.
    Choice(&'static [&'static str]),
    /// One of the categories loaded from the service.
    Category,
    /// One local file path.
    File,
    /// Local file paths separated by `;`.
    Files,
}

impl FieldKind {
    /// Returns true for file path fields.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File | Self::Files)
    }
}

/// Extra format rule checked after the required check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// No extra rule.
    None,
    /// Letter number such as `012/UND/IX/2025`.
    LetterNumber,
    /// Must equal the named field.
    Matches(&'static str),
}

/// One form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, also the key in [`super::FormState`].
    pub name: &'static str,
    /// Label shown above the input.
    pub label: &'static str,
    /// Input kind.
    pub kind: FieldKind,
    /// Message when a required field is blank; `None` means optional.
    pub required: Option<&'static str>,
    /// Format rule.
    pub rule: Rule,
    /// Whether the value is sent to the service.
    pub submit: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: None,
            rule: Rule::None,
            submit: true,
        }
    }

    /// Single-line text field.
    #[must_use]
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Field of any kind.
    #[must_use]
    pub const fn of(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self::new(name, label, kind)
    }

    /// Marks the field required with `message`.
    #[must_use]
    pub const fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    /// Adds the letter-number rule.
    #[must_use]
    pub const fn letter_number(mut self) -> Self {
        self.rule = Rule::LetterNumber;
        self
    }

    /// Requires the value to equal `other`; the field itself is not submitted.
    #[must_use]
    pub const fn confirms(mut self, other: &'static str) -> Self {
        self.rule = Rule::Matches(other);
        self.submit = false;
        self
    }

    /// Returns true if the field must be filled.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required.is_some()
    }
}

/// Every form the client shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Sign in.
    Login,
    /// Record an incoming letter.
    InboxCreate,
    /// Edit an incoming letter.
    InboxEdit,
    /// Draft an outgoing letter.
    OutboxCreate,
    /// Edit an outgoing letter.
    OutboxEdit,
    /// Register an account.
    UserRegister,
    /// Administrator edit of an account.
    UserManage,
    /// Own profile.
    Profile,
    /// Own password.
    Password,
    /// Organization profile.
    Organization,
    /// Category name.
    Category,
    /// Disposition action.
    Disposition,
}

/// Field list plus the notifications of one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    /// Which form.
    pub kind: FormKind,
    /// Card heading.
    pub title: &'static str,
    /// Fields in display order.
    pub fields: &'static [FieldSpec],
    /// Summary notification when a required field is blank.
    pub incomplete: &'static str,
    /// Notification after a successful submit.
    pub success: &'static str,
    /// Notification after a failed submit without a server message.
    pub failure: &'static str,
}

impl FormSchema {
    /// Looks up a field by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const ROLE_CHOICES: &[&str] = &["user", "admin", "superadmin"];
const STATUS_CHOICES: &[&str] = &["active", "inactive"];

const LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("username", "Username").required("Username wajib diisi"),
    FieldSpec::of("password", "Password", FieldKind::Password).required("Password wajib diisi"),
];

const INBOX_CREATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("number", "Nomor Surat")
        .required("Nomor surat wajib diisi")
        .letter_number(),
    FieldSpec::of("category", "Perihal", FieldKind::Category).required("Perihal wajib diisi"),
    FieldSpec::of("date", "Tanggal Surat", FieldKind::Date).required("Tanggal surat wajib diisi"),
    FieldSpec::of("recievedDate", "Tanggal Diterima", FieldKind::Date)
        .required("Tanggal diterima wajib diisi"),
    FieldSpec::text("origin", "Asal Surat").required("Asal surat wajib diisi"),
    FieldSpec::of("summary", "Ringkasan", FieldKind::Multiline).required("Ringkasan wajib diisi"),
    FieldSpec::of("mailPic", "File Surat", FieldKind::File).required("File surat wajib diunggah"),
    FieldSpec::of("attachments", "Lampiran", FieldKind::Files),
];

const INBOX_EDIT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("number", "Nomor Surat")
        .required("Nomor surat wajib diisi")
        .letter_number(),
    FieldSpec::of("category", "Perihal", FieldKind::Category).required("Perihal wajib diisi"),
    FieldSpec::of("date", "Tanggal Surat", FieldKind::Date).required("Tanggal surat wajib diisi"),
    FieldSpec::of("recievedDate", "Tanggal Diterima", FieldKind::Date)
        .required("Tanggal diterima wajib diisi"),
    FieldSpec::text("origin", "Asal Surat").required("Asal surat wajib diisi"),
    FieldSpec::of("summary", "Ringkasan", FieldKind::Multiline).required("Ringkasan wajib diisi"),
    FieldSpec::of("mailPic", "Ganti File Surat", FieldKind::File),
    FieldSpec::of("attachments", "Tambah Lampiran", FieldKind::Files),
];

const OUTBOX_CREATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("number", "Nomor Surat")
        .required("Nomor surat wajib diisi")
        .letter_number(),
    FieldSpec::of("category", "Kategori", FieldKind::Category).required("Kategori wajib diisi"),
    FieldSpec::of("date", "Tanggal Surat", FieldKind::Date).required("Tanggal surat wajib diisi"),
    FieldSpec::text("destination", "Tujuan").required("Tujuan surat wajib diisi"),
    FieldSpec::of("summary", "Ringkasan", FieldKind::Multiline).required("Ringkasan wajib diisi"),
    FieldSpec::text("sign", "Penanda Tangan").required("Penanda tangan wajib diisi"),
    FieldSpec::of("content", "Isi Surat", FieldKind::Multiline)
        .required("Isi surat tidak boleh kosong!"),
    FieldSpec::of("attachments", "Lampiran", FieldKind::Files),
];

const OUTBOX_EDIT_FIELDS: &[FieldSpec] = OUTBOX_CREATE_FIELDS;

const USER_REGISTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Nama Lengkap").required("Nama wajib diisi"),
    FieldSpec::text("username", "Username").required("Username wajib diisi"),
    FieldSpec::of("password", "Password", FieldKind::Password).required("Password wajib diisi"),
    FieldSpec::text("number", "Nomor Telepon").required("Nomor telepon wajib diisi"),
    FieldSpec::of("address", "Alamat", FieldKind::Multiline).required("Alamat wajib diisi"),
    FieldSpec::text("position", "Jabatan").required("Jabatan wajib diisi"),
    FieldSpec::text("nbm", "NBM").required("NBM wajib diisi"),
    FieldSpec::of("role", "Role", FieldKind::Choice(ROLE_CHOICES)).required("Role wajib dipilih"),
    FieldSpec::of("status", "Status", FieldKind::Choice(STATUS_CHOICES))
        .required("Status wajib dipilih"),
];

const USER_MANAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Nama Lengkap").required("Nama wajib diisi"),
    FieldSpec::of("address", "Alamat", FieldKind::Multiline),
    FieldSpec::text("position", "Jabatan"),
    FieldSpec::text("number", "Nomor Telepon"),
    FieldSpec::of("role", "Role", FieldKind::Choice(ROLE_CHOICES)).required("Role wajib dipilih"),
    FieldSpec::of("status", "Status", FieldKind::Choice(STATUS_CHOICES))
        .required("Status wajib dipilih"),
];

const PROFILE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Nama Lengkap").required("Nama wajib diisi"),
    FieldSpec::of("address", "Alamat", FieldKind::Multiline),
    FieldSpec::text("position", "Jabatan"),
    FieldSpec::text("number", "Nomor Telepon"),
    FieldSpec::text("nbm", "NBM"),
    FieldSpec::of("picture", "Foto Profil", FieldKind::File),
];

const PASSWORD_FIELDS: &[FieldSpec] = &[
    FieldSpec::of("currentPassword", "Password Lama", FieldKind::Password)
        .required("Semua kolom wajib diisi"),
    FieldSpec::of("newPassword", "Password Baru", FieldKind::Password)
        .required("Semua kolom wajib diisi"),
    FieldSpec::of("confirmPassword", "Konfirmasi Password Baru", FieldKind::Password)
        .required("Semua kolom wajib diisi")
        .confirms("newPassword"),
];

const ORGANIZATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Nama Organisasi").required("Nama organisasi wajib diisi"),
    FieldSpec::of("address", "Alamat", FieldKind::Multiline).required("Alamat wajib diisi"),
    FieldSpec::text("number", "Nomor Telepon").required("Nomor telepon wajib diisi"),
    FieldSpec::of("email", "Email", FieldKind::Email).required("Email wajib diisi"),
    FieldSpec::of("logo", "Logo", FieldKind::File),
];

const CATEGORY_FIELDS: &[FieldSpec] =
    &[FieldSpec::text("name", "Nama Kategori").required("Nama kategori wajib diisi")];

const DISPOSITION_FIELDS: &[FieldSpec] = &[FieldSpec::of(
    "action",
    "Tindakan",
    FieldKind::Choice(&DISPOSITION_ACTIONS),
)
.required("Pilih tindakan terlebih dahulu")];

impl FormKind {
    /// Schema of this form.
    #[must_use]
    pub const fn schema(self) -> FormSchema {
        match self {
            Self::Login => FormSchema {
                kind: self,
                title: "Masuk",
                fields: LOGIN_FIELDS,
                incomplete: "Username dan password wajib diisi",
                success: "Login berhasil",
                failure: "Login gagal",
            },
            Self::InboxCreate => FormSchema {
                kind: self,
                title: "Input Surat Masuk",
                fields: INBOX_CREATE_FIELDS,
                incomplete: "Harap isi semua kolom wajib!",
                success: "Surat masuk berhasil ditambahkan",
                failure: "Gagal menambahkan surat masuk",
            },
            Self::InboxEdit => FormSchema {
                kind: self,
                title: "Edit Surat Masuk",
                fields: INBOX_EDIT_FIELDS,
                incomplete: "Harap isi semua kolom wajib!",
                success: "Surat berhasil diperbarui",
                failure: "Gagal memperbarui surat",
            },
            Self::OutboxCreate => FormSchema {
                kind: self,
                title: "Buat Surat Keluar",
                fields: OUTBOX_CREATE_FIELDS,
                incomplete: "Semua kolom wajib diisi!",
                success: "Surat keluar berhasil dibuat",
                failure: "Gagal membuat surat keluar",
            },
            Self::OutboxEdit => FormSchema {
                kind: self,
                title: "Edit Surat Keluar",
                fields: OUTBOX_EDIT_FIELDS,
                incomplete: "Semua kolom wajib diisi!",
                success: "Surat berhasil diperbarui",
                failure: "Gagal memperbarui surat",
            },
            Self::UserRegister => FormSchema {
                kind: self,
                title: "Tambah Anggota",
                fields: USER_REGISTER_FIELDS,
                incomplete: "Semua kolom wajib diisi",
                success: "Anggota berhasil ditambahkan",
                failure: "Gagal menambahkan anggota",
            },
            Self::UserManage => FormSchema {
                kind: self,
                title: "Kelola Anggota",
                fields: USER_MANAGE_FIELDS,
                incomplete: "Nama, role dan status wajib diisi",
                success: "Data anggota berhasil diperbarui",
                failure: "Gagal memperbarui data anggota",
            },
            Self::Profile => FormSchema {
                kind: self,
                title: "Ubah Data Diri",
                fields: PROFILE_FIELDS,
                incomplete: "Nama wajib diisi",
                success: "Profil berhasil diperbarui",
                failure: "Gagal memperbarui profil",
            },
            Self::Password => FormSchema {
                kind: self,
                title: "Ganti Kata Sandi",
                fields: PASSWORD_FIELDS,
                incomplete: "Semua kolom wajib diisi",
                success: "Password berhasil diubah",
                failure: "Gagal mengubah password",
            },
            Self::Organization => FormSchema {
                kind: self,
                title: "Profil Organisasi",
                fields: ORGANIZATION_FIELDS,
                incomplete: "Harap isi semua kolom wajib!",
                success: "Data organisasi berhasil disimpan",
                failure: "Gagal menyimpan data organisasi",
            },
            Self::Category => FormSchema {
                kind: self,
                title: "Kategori",
                fields: CATEGORY_FIELDS,
                incomplete: "Nama kategori wajib diisi",
                success: "Kategori berhasil disimpan",
                failure: "Gagal menyimpan kategori",
            },
            Self::Disposition => FormSchema {
                kind: self,
                title: "Disposisi",
                fields: DISPOSITION_FIELDS,
                incomplete: "Pilih tindakan terlebih dahulu",
                success: "Disposisi berhasil disimpan",
                failure: "Gagal menyimpan disposisi",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FormKind; 12] = [
        FormKind::Login,
        FormKind::InboxCreate,
        FormKind::InboxEdit,
        FormKind::OutboxCreate,
        FormKind::OutboxEdit,
        FormKind::UserRegister,
        FormKind::UserManage,
        FormKind::Profile,
        FormKind::Password,
        FormKind::Organization,
        FormKind::Category,
        FormKind::Disposition,
    ];

    #[test]
    fn test_field_names_unique() {
        for kind in ALL {
            let schema = kind.schema();
            let mut names: Vec<&str> = schema.fields.iter().map(|f| f.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), schema.fields.len(), "{kind:?}");
        }
    }

    #[test]
    fn test_confirm_targets_exist() {
        for kind in ALL {
            let schema = kind.schema();
            for field in schema.fields {
                if let Rule::Matches(other) = field.rule {
                    assert!(schema.field(other).is_some(), "{kind:?}.{}", field.name);
                    assert!(!field.submit);
                }
            }
        }
    }

    #[test]
    fn test_inbox_scan_required_only_on_create() {
        let create = FormKind::InboxCreate.schema();
        let edit = FormKind::InboxEdit.schema();
        assert!(create.field("mailPic").is_some_and(FieldSpec::is_required));
        assert!(!edit.field("mailPic").is_some_and(FieldSpec::is_required));
    }
}
