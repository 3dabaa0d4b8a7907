//! Android vCard export fixtures.
//!
//! Shapes follow what the stock Android contacts app writes.

/// vCard 2.1 export with relations, an event, a nickname, and custom labels.
pub const ANDROID_FULL: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=E7=8E=8B;=E5=B0=8F=E6=98=8E;;;\r\n\
FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=E7=8E=8B=E5=B0=8F=E6=98=8E\r\n\
TEL;CELL:+86 138 0000 0000\r\n\
TEL;X-=E5=AE=B6=E5=BA=AD;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:+86 10 1234 5678\r\n\
EMAIL;X-=E5=85=AC=E5=8F=B8;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:xm@example.com\r\n\
X-ANDROID-CUSTOM:vnd.android.cursor.item/nickname;Ming;1;;;;;;;;;;;;;\r\n\
X-ANDROID-CUSTOM:vnd.android.cursor.item/relation;John;5\r\n\
X-ANDROID-CUSTOM:vnd.android.cursor.item/relation;Mary;8\r\n\
X-ANDROID-CUSTOM:vnd.android.cursor.item/contact_event;2010-06-21;1\r\n\
END:VCARD\r\n";

/// Contact with a line-wrapped photo followed by a blank line.
pub const ANDROID_PHOTO: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
FN:Photo Person\r\n\
PHOTO;ENCODING=BASE64;JPEG:/9j/4AAQSkZJ\r\n\
 RgABAQAAAQABAAD\r\n\
 /2wBDAAMCAgI=\r\n\
\r\n\
END:VCARD\r\n";

/// vCard 2.1 export with soft-wrapped quoted-printable lines and a photo
/// followed directly by another property.
pub const ANDROID_WRAPPED: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
FN:Wrapped\r\n\
TEL;X-=E5=AE=B6;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=2B1 555 0100\r\n\
X-ANDROID-CUSTOM;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:vnd.android.cursor.item/relation;=E7=8E=\r\n\
=8B;5\r\n\
PHOTO;ENCODING=BASE64;JPEG:/9j/4AAQSkZJ\r\n\
 RgABAQAAAQABAAD\r\n\
 /2wBDAAMCAgI=\r\n\
NOTE:after photo\r\n\
END:VCARD\r\n";

/// Two contacts in one export, LF line endings.
pub const ANDROID_BATCH: &str = "\
BEGIN:VCARD\n\
VERSION:3.0\n\
FN:First\n\
X-ANDROID-CUSTOM:vnd.android.cursor.item/relation;Ann;Coach\n\
END:VCARD\n\
BEGIN:VCARD\n\
VERSION:3.0\n\
FN:Second\n\
X-ANDROID-CUSTOM:vnd.android.cursor.item/relation;Bob;99\n\
X-ANDROID-CUSTOM:vnd.android.cursor.item/im;bob@chat\n\
END:VCARD\n";

/// Apple-dialect card with nothing left to translate.
pub const APPLE_NATIVE: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Jane Appleseed\r\n\
TEL;type=CELL;type=VOICE;type=pref:555-0100\r\n\
item1.X-ABRELATEDNAMES:John Appleseed\r\n\
item1.X-ABLabel:_$!<Spouse>!$_\r\n\
END:VCARD\r\n";
